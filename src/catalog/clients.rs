use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientStatus::Active => write!(f, "active"),
            ClientStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Client {
    /// Table key in clients.toml
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub address: String,
    #[serde(default)]
    pub total_invoices: u32,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: ClientStatus,
}

/// Clients whose name or email contains `term`, ignoring case.
/// An empty term keeps everyone.
pub fn search_clients<'a>(clients: &'a [Client], term: &str) -> Vec<&'a Client> {
    let term = term.to_lowercase();
    clients
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term))
        .collect()
}

mod company;
mod draft;

pub use company::{Company, Config, GallerySettings, InvoiceSettings};
pub use draft::Draft;

use crate::catalog::{Client, IssuedInvoice};
use crate::error::{InvoiceError, Result};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (XDG, falling back to ~/.invoice-preview/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoice-preview") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        InvoiceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoice-preview"))
}

fn load_toml<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(InvoiceError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    tracing::debug!(path = %path.display(), "loading");
    toml::from_str(&content).map_err(|e| InvoiceError::ConfigParse { path, source: e })
}

/// Load the main config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    load_toml(config_dir.join("config.toml"))
}

/// Load config.toml if the directory was initialized, built-in defaults otherwise
pub fn load_config_or_default(config_dir: &Path) -> Result<Config> {
    if config_dir.join("config.toml").exists() {
        load_config(config_dir)
    } else {
        tracing::debug!(dir = %config_dir.display(), "no config found, using defaults");
        Ok(Config::default())
    }
}

/// Load clients.toml, sorted by table key
pub fn load_clients(config_dir: &Path) -> Result<Vec<Client>> {
    let table: BTreeMap<String, Client> = load_toml(config_dir.join("clients.toml"))?;
    Ok(table
        .into_iter()
        .map(|(id, client)| Client { id, ..client })
        .collect())
}

/// Load invoices.toml, sorted by table key
pub fn load_invoices(config_dir: &Path) -> Result<Vec<IssuedInvoice>> {
    let table: BTreeMap<String, IssuedInvoice> = load_toml(config_dir.join("invoices.toml"))?;
    Ok(table
        .into_iter()
        .map(|(id, invoice)| IssuedInvoice { id, ..invoice })
        .collect())
}

/// Load a draft and re-derive its stored line totals
pub fn load_draft(path: &Path) -> Result<Draft> {
    if !path.exists() {
        return Err(InvoiceError::DraftNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let mut draft: Draft = toml::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    draft.document.refresh_line_totals();
    tracing::debug!(
        path = %path.display(),
        items = draft.document.items.len(),
        "loaded draft"
    );
    Ok(draft)
}

pub fn save_draft(path: &Path, draft: &Draft) -> Result<()> {
    let content = toml::to_string_pretty(draft)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved draft");
    Ok(())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "Your Company"
address = "123 Business Street\nSan Francisco, CA 94102"
tax_id = "12-3456789"                      # optional
# logo = "https://example.com/logo.png"    # optional

[invoice]
currency_symbol = "$"
default_template = "minimal"   # minimal, modern, corporate, elegant, creative, tech
terms = "Payment is due within 30 days of invoice date."
due_days = 30                  # 0 leaves the due date blank

[gallery]
favorites = []                 # e.g., ["modern", "tech"]
"#;

/// Template content for clients.toml
pub const CLIENTS_TEMPLATE: &str = r#"# Define your clients here. The table name (e.g., [acme]) is used
# as the client identifier in the new command.
#
# Example:
#   invoice-preview new draft.toml --client acme

[acme]
name = "Acme Corporation"
email = "contact@acme.com"
phone = "+1 (555) 123-4567"
address = "123 Business St, New York, NY 10001"
total_invoices = 12
total_amount = 25600.0
status = "active"

[tech-solutions]
name = "Tech Solutions Inc"
email = "hello@techsolutions.com"
phone = "+1 (555) 987-6543"
address = "456 Innovation Ave, San Francisco, CA 94102"
total_invoices = 8
total_amount = 18400.0
status = "active"

[creative-design]
name = "Creative Design Studio"
email = "info@creativedesign.com"
phone = "+1 (555) 456-7890"
address = "789 Art District, Los Angeles, CA 90210"
total_invoices = 15
total_amount = 32100.0
status = "active"

[marketing-solutions]
name = "Marketing Solutions Co"
email = "team@marketingsolutions.com"
phone = "+1 (555) 321-9876"
address = "321 Commerce Blvd, Chicago, IL 60601"
total_invoices = 5
total_amount = 9800.0
status = "inactive"
"#;

/// Template content for invoices.toml
pub const INVOICES_TEMPLATE: &str = r#"# Invoices already issued, keyed by invoice number.
# status is one of: paid, pending, overdue, draft

[INV-001]
client = "Acme Corporation"
amount = 2500.0
status = "paid"
date = "2024-01-15"
due_date = "2024-02-15"

[INV-002]
client = "Tech Solutions Inc"
amount = 1800.0
status = "pending"
date = "2024-01-14"
due_date = "2024-02-14"

[INV-003]
client = "Creative Design Studio"
amount = 3200.0
status = "paid"
date = "2024-01-13"
due_date = "2024-02-13"

[INV-004]
client = "Marketing Solutions Co"
amount = 950.0
status = "overdue"
date = "2024-01-10"
due_date = "2024-01-25"

[INV-005]
client = "Digital Agency"
amount = 4200.0
status = "draft"
date = "2024-01-12"
due_date = "2024-02-12"
"#;

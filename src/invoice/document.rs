use serde::{Deserialize, Serialize};

use super::{compute_totals, recompute_line_total, ItemId, ItemUpdate, LineItem, Totals};

pub const DEFAULT_INVOICE_NUMBER: &str = "INV-001";
pub const DEFAULT_COMPANY_NAME: &str = "Your Company";
pub const DEFAULT_TERMS: &str = "Payment is due within 30 days of invoice date.";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Header, party and footer fields. Empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub company_name: String,
    pub company_address: String,
    pub company_logo: String,
    pub company_tax_id: String,
    pub client_name: String,
    pub client_address: String,
    pub client_tax_id: String,
    pub notes: String,
    pub terms: String,
    pub currency_symbol: String,
}

impl Metadata {
    /// Fields a fresh draft starts with, dated `issue_date`
    pub fn with_defaults(issue_date: chrono::NaiveDate) -> Self {
        Self {
            invoice_number: DEFAULT_INVOICE_NUMBER.to_string(),
            issue_date: issue_date.format("%Y-%m-%d").to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            terms: DEFAULT_TERMS.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            ..Self::default()
        }
    }
}

/// An invoice being edited: ordered items, discount and metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Percent applied to the pre-tax subtotal, never to tax
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl InvoiceDocument {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            discount_percent: 0.0,
            metadata,
            items: Vec::new(),
        }
    }

    /// Append a zeroed item and return its id
    pub fn add_item(&mut self) -> ItemId {
        let item = LineItem::new();
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    pub fn item(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Apply `update` to the item with `id`. Returns false if no such item.
    pub fn update_item(&mut self, id: &ItemId, update: ItemUpdate) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<LineItem> {
        let idx = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Re-derive every stored line total, e.g. after loading from disk
    pub fn refresh_line_totals(&mut self) {
        self.items = std::mem::take(&mut self.items)
            .into_iter()
            .map(recompute_line_total)
            .collect();
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.discount_percent)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier for a line item within a draft
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Millisecond timestamp plus a process-wide sequence, so ids minted in
    /// the same millisecond still differ.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!("{millis}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single field edit on a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Description(String),
    Quantity(f64),
    Rate(f64),
    TaxRate(f64),
}

impl ItemUpdate {
    /// Whether applying this update invalidates `line_total`
    pub fn affects_total(&self) -> bool {
        !matches!(self, ItemUpdate::Description(_))
    }
}

/// One billable row on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub rate: f64,
    /// Percent, 0-100
    #[serde(default)]
    pub tax_rate: f64,
    /// Derived from quantity, rate and tax_rate; never authoritative.
    #[serde(default)]
    pub line_total: f64,
}

impl LineItem {
    pub fn new() -> Self {
        Self {
            id: ItemId::generate(),
            description: String::new(),
            quantity: 0.0,
            rate: 0.0,
            tax_rate: 0.0,
            line_total: 0.0,
        }
    }

    /// Pre-tax amount for this row
    pub fn net_amount(&self) -> f64 {
        self.quantity * self.rate
    }

    /// Tax owed on this row
    pub fn tax_amount(&self) -> f64 {
        self.quantity * self.rate * self.tax_rate / 100.0
    }

    /// Apply one edit. Returns true when `line_total` was re-derived.
    pub fn apply(&mut self, update: ItemUpdate) -> bool {
        let recompute = update.affects_total();
        match update {
            ItemUpdate::Description(description) => self.description = description,
            ItemUpdate::Quantity(quantity) => self.quantity = quantity,
            ItemUpdate::Rate(rate) => self.rate = rate,
            ItemUpdate::TaxRate(tax_rate) => self.tax_rate = tax_rate,
        }
        if recompute {
            self.line_total = line_total_of(self);
        }
        recompute
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

fn line_total_of(item: &LineItem) -> f64 {
    item.quantity * item.rate * (1.0 + item.tax_rate / 100.0)
}

/// Return `item` with `line_total` replaced by quantity * rate * (1 + tax/100)
pub fn recompute_line_total(item: LineItem) -> LineItem {
    let line_total = line_total_of(&item);
    LineItem { line_total, ..item }
}

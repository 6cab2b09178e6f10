mod document;
mod line_item;
mod money;
mod totals;

pub use document::{
    InvoiceDocument, Metadata, DEFAULT_COMPANY_NAME, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_INVOICE_NUMBER, DEFAULT_TERMS,
};
pub use line_item::{recompute_line_total, ItemId, ItemUpdate, LineItem};
pub use money::{format_money, group_digits};
pub use totals::{compute_totals, Totals};

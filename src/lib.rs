pub mod catalog;
pub mod config;
pub mod error;
pub mod invoice;
pub mod render;

pub use config::{Config, Draft};
pub use error::{InvoiceError, Result};
pub use invoice::{
    compute_totals, format_money, recompute_line_total, InvoiceDocument, ItemId, ItemUpdate, LineItem, Metadata,
    Totals,
};
pub use render::{render, Node, TemplateVariant};

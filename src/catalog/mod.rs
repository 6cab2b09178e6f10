mod clients;
mod invoices;
mod templates;

pub use clients::{search_clients, Client, ClientStatus};
pub use invoices::{search_invoices, summarize, InvoiceStatus, IssuedInvoice, Summary};
pub use templates::{
    categories, filter_templates, gallery, template_info, Favorites, TemplateInfo, ALL_CATEGORIES,
};

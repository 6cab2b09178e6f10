use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Config;
use crate::catalog::Client;
use crate::invoice::{InvoiceDocument, Metadata};
use crate::render::TemplateVariant;

/// An editing session saved to disk: the document plus its chosen template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub template: TemplateVariant,
    #[serde(flatten)]
    pub document: InvoiceDocument,
}

impl Draft {
    /// Start a draft dated `today`, seeded from config and an optional client
    pub fn seeded(config: &Config, client: Option<&Client>, today: NaiveDate) -> Self {
        let settings = &config.invoice;
        let mut metadata = Metadata::with_defaults(today);

        metadata.company_name = config.company.name.clone();
        metadata.company_address = config.company.address.clone();
        metadata.company_logo = config.company.logo.clone().unwrap_or_default();
        metadata.company_tax_id = config.company.tax_id.clone().unwrap_or_default();
        metadata.currency_symbol = settings.currency_symbol.clone();
        metadata.terms = settings.terms.clone();
        if settings.due_days > 0 {
            if let Some(due) = today.checked_add_signed(chrono::Duration::days(settings.due_days as i64)) {
                metadata.due_date = due.format("%Y-%m-%d").to_string();
            }
        }
        if let Some(client) = client {
            metadata.client_name = client.name.clone();
            metadata.client_address = client.address.clone();
        }

        Self {
            template: settings.default_template,
            document: InvoiceDocument::new(metadata),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::invoice::{DEFAULT_COMPANY_NAME, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TERMS};
use crate::render::TemplateVariant;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    pub company: Company,
    #[serde(default)]
    pub invoice: InvoiceSettings,
    #[serde(default)]
    pub gallery: GallerySettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPANY_NAME.to_string(),
            address: String::new(),
            logo: None,
            tax_id: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InvoiceSettings {
    pub currency_symbol: String,
    pub default_template: TemplateVariant,
    pub terms: String,
    /// Days after the issue date a new draft falls due; 0 leaves it blank
    pub due_days: u32,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_template: TemplateVariant::default(),
            terms: DEFAULT_TERMS.to_string(),
            due_days: 0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GallerySettings {
    pub favorites: Vec<TemplateVariant>,
}

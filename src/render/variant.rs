use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvoiceError;

/// Visual layout applied to an invoice. Adding a layout means adding a case here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Minimal,
    Modern,
    Corporate,
    Elegant,
    Creative,
    Tech,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 6] = [
        TemplateVariant::Minimal,
        TemplateVariant::Modern,
        TemplateVariant::Corporate,
        TemplateVariant::Elegant,
        TemplateVariant::Creative,
        TemplateVariant::Tech,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateVariant::Minimal => "minimal",
            TemplateVariant::Modern => "modern",
            TemplateVariant::Corporate => "corporate",
            TemplateVariant::Elegant => "elegant",
            TemplateVariant::Creative => "creative",
            TemplateVariant::Tech => "tech",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateVariant {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.id() == wanted)
            .ok_or_else(|| InvoiceError::UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_id() {
        for variant in TemplateVariant::ALL {
            assert_eq!(variant.id().parse::<TemplateVariant>().unwrap(), variant);
            assert_eq!(variant.to_string(), variant.id());
        }
        assert_eq!("Modern".parse::<TemplateVariant>().unwrap(), TemplateVariant::Modern);
    }

    #[test]
    fn rejects_unknown_id() {
        let err = "fancy".parse::<TemplateVariant>().unwrap_err();
        assert!(matches!(err, InvoiceError::UnknownTemplate(ref s) if s == "fancy"));
    }
}

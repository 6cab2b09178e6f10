use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Config directory not found at {0}. Run 'invoice-preview init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize draft: {0}")]
    DraftSerialize(#[from] toml::ser::Error),

    #[error("Draft file not found: {0}")]
    DraftNotFound(PathBuf),

    #[error("Draft file already exists: {0}")]
    DraftExists(PathBuf),

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Unknown template '{0}'. Run 'invoice-preview templates' to see available templates.")]
    UnknownTemplate(String),

    #[error("Unknown output format '{0}'. Use 'html', 'json', or 'text'.")]
    UnknownFormat(String),

    #[error("Unknown invoice status '{0}'. Use 'paid', 'pending', 'overdue', or 'draft'.")]
    UnknownStatus(String),

    #[error("Item '{0}' not found in draft")]
    ItemNotFound(String),

    #[error("Client '{0}' not found in clients.toml")]
    ClientNotFound(String),

    #[error("Invalid {field} '{value}': must be a finite number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Failed to encode preview: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;

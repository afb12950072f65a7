//! Error types for Folio

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Project errors (E001-E099)
    #[error("Project '{0}' not found. Run `folio projects list` to see all projects.")]
    ProjectNotFound(String),

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    // Catalog errors (E100-E199)
    #[error("Catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("Unsupported catalog format '{0}'. Use a .toml or .json file.")]
    UnsupportedCatalogFormat(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(String),

    // Page errors (E200-E299)
    #[error("Container element '#{0}' not found in page")]
    ContainerNotFound(String),

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Generic errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::InvalidProject(_) => "E002",
            Self::CatalogNotFound(_) => "E100",
            Self::UnsupportedCatalogFormat(_) => "E101",
            Self::CatalogParse(_) => "E102",
            Self::ContainerNotFound(_) => "E200",
            Self::ConfigError(_) => "E600",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("folio projects list".to_string()),
            Self::CatalogNotFound(_) | Self::UnsupportedCatalogFormat(_) => {
                Some("folio config set catalog.path <file.toml|file.json>".to_string())
            }
            Self::ContainerNotFound(id) => Some(format!("folio render --container {}", id)),
            Self::ConfigError(_) => Some("folio config list".to_string()),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::CatalogParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse(err.to_string())
    }
}

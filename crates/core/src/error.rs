use thiserror::Error;

/// Result type alias for tripane-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Tripane launcher
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors raised by a catalog collaborator
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors reported by a catalog (the item/action query interface)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No candidate with this id
    #[error("candidate not found: {0}")]
    NotFound(String),

    /// Executing an action failed
    #[error("action '{action}' failed: {message}")]
    Execution { action: String, message: String },

    /// The backing source could not be read
    #[error("source error: {0}")]
    Source(String),
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn execution(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution { action: action.into(), message: message.into() }
    }

    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

//! Error types for menu-core

use thiserror::Error;

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;

/// Menu core error types
#[derive(Error, Debug)]
pub enum MenuError {
    /// Caller input rejected before any mutation took place
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistent store fault (e.g. quota exceeded in a browser binding)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Serialization(err.to_string())
    }
}

//! Domain-level error types.

use thiserror::Error;

/// Storage errors raised by document stores and the repositories built on them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {collection} with id {id}")]
    NotFound { collection: &'static str, id: String },

    /// The collection holds no records at all.
    #[error("no records found")]
    Empty,

    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("storage I/O failed: {0}")]
    Io(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            collection,
            id: id.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

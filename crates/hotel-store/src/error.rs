//! Record store error types

use thiserror::Error;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error reading snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

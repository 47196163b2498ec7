//! Storage-layer error types and conversions.

use opsdesk_core::error::OpsdeskError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for OpsdeskError {
    fn from(err: StoreError) -> Self {
        OpsdeskError::Storage(err.to_string())
    }
}

//! Error types for the receipt processor.

use crate::store::StoreError;
use thiserror::Error;

/// Result type alias for processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Errors that can occur while processing or serving receipts.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// No points are stored for the requested receipt id
    #[error("No receipt found for id {id}")]
    NotFound { id: String },

    /// Receipt failed presence validation
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    /// Failed to bind or serve the listener
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Host and port did not form a socket address
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

impl From<StoreError> for ProcessorError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProcessorError::NotFound { id },
        }
    }
}

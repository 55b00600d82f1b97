//! Error Types for the Cart Store

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CartError>;

/// Cart-related errors
#[derive(Error, Debug)]
pub enum CartError {
    /// Stored cart could not be read from the backing store
    #[error("Failed to read persisted cart: {0}")]
    PersistenceRead(String),

    /// Cart could not be written to the backing store
    #[error("Failed to write persisted cart: {0}")]
    PersistenceWrite(String),

    /// Stored record was readable but does not describe a valid cart
    #[error("Malformed cart record: {0}")]
    Decode(String),

    /// Local input rejected before it reaches the cart or the backend
    #[error("{0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

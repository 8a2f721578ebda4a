//! Cart error types.

use bite_store::StoreError;
use thiserror::Error;

/// Errors that can occur while persisting or restoring a cart.
///
/// Cart mutations themselves never fail; these only surface from a
/// [`CartRepository`](crate::CartRepository).
#[derive(Error, Debug)]
pub enum CartError {
    /// The key-value store rejected the read or write.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// The persisted value is not a list of line item records.
    #[error("Corrupt cart data: {0}")]
    Decode(#[from] serde_json::Error),
}

//! Error types for the session order store.

use crate::model::OrderError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No order is shown under this number.
    #[error("Invalid order number: {number} (store holds {len})")]
    InvalidOrderNumber { number: usize, len: usize },

    /// Removal was requested from an empty store.
    #[error("No orders in the store")]
    Empty,

    /// The change would break an order invariant.
    #[error(transparent)]
    Order(#[from] OrderError),
}

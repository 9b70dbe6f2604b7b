//! Error types for the session loop.

use crate::input::InputError;
use crate::model::OrderError;
use crate::store::StoreError;
use thiserror::Error;

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Order store error: {0}")]
    Store(#[from] StoreError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

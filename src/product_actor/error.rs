//! Failures reported by the product store.

use crate::framework::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product with this id; carries the displayed id (`product_7`).
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A create or update tried to set a negative price.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// The actor is gone, or rejected the request. Batched writes that fail
    /// arrive here with nothing applied.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

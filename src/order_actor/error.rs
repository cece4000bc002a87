use crate::framework::FrameworkError;
use thiserror::Error;

/// Order store failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order without line items.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_onto_order_errors() {
        assert_eq!(
            OrderError::from(FrameworkError::NotFound("order_3".into())),
            OrderError::NotFound("order_3".into())
        );
        assert_eq!(
            OrderError::from(FrameworkError::ActorClosed),
            OrderError::ActorCommunicationError("Actor closed".into())
        );
    }
}

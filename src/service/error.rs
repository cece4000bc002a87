//! Error type for order creation.

use crate::customer_actor::CustomerError;
use crate::model::ProductId;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why an order could not be created.
///
/// The first five variants are business-rule violations caused by the
/// request itself. The rest are store failures, forwarded as-is.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("Customer not found")]
    CustomerNotFound,

    #[error("No product was found")]
    NoProductsFound,

    #[error("Could not find product {0}")]
    ProductNotFound(ProductId),

    #[error("Product {0} with insufficient quantity")]
    InsufficientStock(ProductId),

    #[error("Invalid quantity for product {0}")]
    InvalidQuantity(ProductId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl CreateOrderError {
    /// True when the request was rejected by a business rule, i.e. the caller
    /// should answer with a client error rather than a server fault.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::CustomerNotFound
                | Self::NoProductsFound
                | Self::ProductNotFound(_)
                | Self::InsufficientStock(_)
                | Self::InvalidQuantity(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CreateOrderError::CustomerNotFound.to_string(), "Customer not found");
        assert_eq!(CreateOrderError::NoProductsFound.to_string(), "No product was found");
        assert_eq!(
            CreateOrderError::ProductNotFound(ProductId(4)).to_string(),
            "Could not find product product_4"
        );
        assert_eq!(
            CreateOrderError::InsufficientStock(ProductId(2)).to_string(),
            "Product product_2 with insufficient quantity"
        );
    }

    #[test]
    fn test_store_failures_are_not_business_rules() {
        let store = CreateOrderError::from(OrderError::ActorCommunicationError("down".into()));
        assert!(!store.is_business_rule());
        assert_eq!(store.to_string(), "Actor communication error: down");
        assert!(CreateOrderError::InsufficientStock(ProductId(1)).is_business_rule());
    }
}

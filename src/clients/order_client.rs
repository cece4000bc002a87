//! # Order Client

use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use tracing::{debug, info, instrument};

/// Client for the Order actor.
///
/// Validation against customers and stock happens in
/// [`CreateOrderService`](crate::service::CreateOrderService) before an order
/// ever reaches this client.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists the order and returns it as stored, line ids included.
    #[instrument(skip(self, params), fields(customer_id = %params.customer.id, lines = params.products.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");

        let id = self.inner.create(params).await?;
        info!(order_id = %id, "Order stored");

        self.inner
            .get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkError;
    use crate::framework::mock::MockClient;
    use crate::model::{Customer, CustomerId, NewOrderLine, OrderId, ProductId};
    use rust_decimal::Decimal;

    fn params() -> OrderCreate {
        OrderCreate {
            customer: Customer::new(CustomerId(1), "Alice", "alice@example.com"),
            products: vec![NewOrderLine {
                product_id: ProductId(1),
                quantity: 2,
                price: Decimal::from(10),
            }],
        }
    }

    #[tokio::test]
    async fn test_create_order_reports_vanished_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(5));
        mock.expect_get(OrderId(5)).return_ok(None);

        let client = OrderClient::new(mock.client());
        let result = client.create_order(params()).await;

        assert_eq!(result, Err(OrderError::NotFound("order_5".to_string())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_order_maps_entity_failure() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::Entity("disk full".to_string()));

        let client = OrderClient::new(mock.client());
        let result = client.create_order(params()).await;

        match result {
            Err(OrderError::ActorCommunicationError(msg)) => assert!(msg.contains("disk full")),
            other => panic!("Expected ActorCommunicationError, got {:?}", other),
        }
        mock.verify();
    }
}

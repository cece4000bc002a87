//! # Product Client
//!
//! Catalog reads and stock writes. [`find_products`](ProductClient::find_products)
//! and [`set_quantities`](ProductClient::set_quantities) are what the
//! [`ProductStore`](crate::stores::ProductStore) implementation delegates to.

use crate::clients::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, QuantityUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!(price = %params.price, quantity = params.quantity, "Registering product");
        Ok(self.inner.create(params).await?)
    }

    /// Current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        let ProductActionResult::CheckStock(level) = self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await?;
        Ok(level)
    }

    /// Every product among `ids` that exists in the catalog, in request order.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn find_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        let found = self.inner.get_many(ids.to_vec()).await?;
        debug!(found = found.len(), "Catalog lookup done");
        Ok(found)
    }

    /// Overwrites stock levels in one batched, all-or-nothing write.
    /// Prices are left alone.
    #[instrument(skip(self, updates), fields(count = updates.len()))]
    pub async fn set_quantities(&self, updates: &[QuantityUpdate]) -> Result<(), ProductError> {
        debug!(?updates, "Writing stock levels");
        let batch = updates
            .iter()
            .map(|QuantityUpdate { id, quantity }| {
                let update = ProductUpdate {
                    price: None,
                    quantity: Some(*quantity),
                };
                (id.clone(), update)
            })
            .collect();
        self.inner.update_many(batch).await?;
        Ok(())
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::FrameworkError;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get_many, expect_update_many};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task = tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId(1));
        assert!(matches!(action, ProductAction::CheckStock));

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        let result = check_task.await.unwrap();
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_find_products_sends_one_batched_lookup() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let find_task = tokio::spawn(async move {
            product_client
                .find_products(&[ProductId(2), ProductId(1)])
                .await
        });

        let (ids, responder) = expect_get_many(&mut receiver)
            .await
            .expect("Expected GetMany request");
        assert_eq!(ids, vec![ProductId(2), ProductId(1)]);

        responder
            .send(Ok(vec![Product::new(ProductId(2), "Gadget", Decimal::from(5), 3)]))
            .unwrap();

        let found = find_task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId(2));
    }

    #[tokio::test]
    async fn test_set_quantities_only_touches_stock() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            product_client
                .set_quantities(&[
                    QuantityUpdate { id: ProductId(1), quantity: 3 },
                    QuantityUpdate { id: ProductId(2), quantity: 0 },
                ])
                .await
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");

        assert_eq!(
            updates,
            vec![
                (ProductId(1), ProductUpdate { price: None, quantity: Some(3) }),
                (ProductId(2), ProductUpdate { price: None, quantity: Some(0) }),
            ]
        );
        responder.send(Ok(Vec::new())).unwrap();

        assert!(update_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_set_quantities_maps_missing_product() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            product_client
                .set_quantities(&[QuantityUpdate { id: ProductId(9), quantity: 1 }])
                .await
        });

        let (_, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        responder
            .send(Err(FrameworkError::NotFound("product_9".to_string())))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound("product_9".to_string())));
    }
}

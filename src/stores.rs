//! # Store Interfaces
//!
//! The three collaborators the order service depends on. The service only
//! sees these traits, so it can run against the in-process actors, a
//! database-backed repository or a test double without changes.
//!
//! Each store reports failures with its own entity error. The service
//! passes them through untouched.

use crate::clients::{ActorClient, CustomerClient, OrderClient, ProductClient};
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerId, Order, OrderCreate, Product, ProductId, QuantityUpdate};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Customer lookup.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Catalog lookup and inventory write.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Products whose id is in `ids`. Unknown ids are simply absent from the
    /// result; no stock filtering is applied.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Sets the stock level of every listed product in a single call.
    async fn update_quantity(&self, updates: &[QuantityUpdate]) -> Result<(), ProductError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists the order atomically and returns it with store-assigned ids.
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;
}

#[async_trait]
impl CustomerStore for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.get(id.clone()).await
    }
}

#[async_trait]
impl ProductStore for ProductClient {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        self.find_products(ids).await
    }

    async fn update_quantity(&self, updates: &[QuantityUpdate]) -> Result<(), ProductError> {
        self.set_quantities(updates).await
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        self.create_order(order).await
    }
}

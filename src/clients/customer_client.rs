//! # Customer Client
//!
//! Registration and profile edits. Lookups go through [`ActorClient::get`].

use crate::clients::ActorClient;
use crate::customer_actor::CustomerError;
use crate::framework::ResourceClient;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Registering customer");
        Ok(self.inner.create(params).await?)
    }

    /// Applies the fields that are `Some` and returns the updated customer.
    #[instrument(skip(self, update), fields(%id))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!(?update, "Updating customer");
        Ok(self.inner.update(id, update).await?)
    }
}

impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }
}

//! [`ActorEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;

/// Customers have no resource-specific actions.
#[derive(Debug, Clone)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.email.trim().is_empty() {
            return Err(CustomerError::ValidationError(
                "email must not be empty".to_string(),
            ));
        }
        Ok(Self::new(id, params.name, params.email))
    }

    /// # Fields Updated
    /// - `name`: Display name
    /// - `email`: Contact address (must not be blank)
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(email) = update.email {
            if email.trim().is_empty() {
                return Err(CustomerError::ValidationError(
                    "email must not be empty".to_string(),
                ));
            }
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: CustomerAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

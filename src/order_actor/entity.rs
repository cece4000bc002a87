//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are write-once. Updates and actions use uninhabited types, so the
//! compiler rejects any attempt to send one.

use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderLine, OrderLineId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    /// Assigns line ids in submission order (`line_1`, `line_2`, ...).
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.products.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line item".to_string(),
            ));
        }

        let ordered_lines = params
            .products
            .into_iter()
            .zip(1..)
            .map(|(line, position)| OrderLine {
                id: OrderLineId {
                    order: id.clone(),
                    line: position,
                },
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.price,
            })
            .collect();

        Ok(Self {
            id,
            customer_id: params.customer.id,
            ordered_lines,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

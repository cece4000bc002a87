//! Application services.
//!
//! [`CreateOrderService`] validates an order request against the customer
//! and product stores, persists it, and writes back the reduced stock.

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;

//! Pure data structures managed by the actors and consumed by the order service.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;

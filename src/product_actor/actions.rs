//! Custom actions for the Product actor.
//!
//! These are the operations on a [`Product`](crate::model::Product) that do not
//! fit the CRUD shape. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
}

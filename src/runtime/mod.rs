//! Runtime orchestration.
//!
//! - [`OrderSystem`] - Spawns the three store actors, exposes their clients and
//!   builds the order service on top of them
//! - [`setup_tracing`] - Installs the global tracing subscriber

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;

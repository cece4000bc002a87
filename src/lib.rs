//! # Order Intake
//!
//! > **Place an order only when the customer exists and every product is in stock.**
//!
//! The heart of the crate is [`CreateOrderService`](service::CreateOrderService).
//! It validates a request against three stores, persists the order and then
//! writes the reduced stock levels back in one batched call.
//!
//! ## 🏗️ Layers
//!
//! ### 1. The Service ([`service`], [`stores`])
//! The order-creation use case and the three store traits it is written against
//! ([`CustomerStore`](stores::CustomerStore), [`ProductStore`](stores::ProductStore),
//! [`OrderStore`](stores::OrderStore)). The service never sees an actor, a
//! channel or a database; anything that implements the traits will do.
//!
//! ### 2. The Engine ([`framework`])
//! A generic `ResourceActor<T>` that owns a map of entities and serves
//! create/get/update/delete requests over a channel. Batched reads
//! (`GetMany`) and all-or-nothing batched writes (`UpdateMany`) are what the
//! product store builds on.
//!
//! ### 3. The Stores ([`customer_actor`], [`product_actor`], [`order_actor`], [`clients`])
//! One actor per entity, each wrapped in a typed client. The clients implement
//! the store traits, so the in-process system is a complete backend for the
//! service.
//!
//! ### 4. The Orchestrator ([`runtime`], [`config`])
//! [`OrderSystem`](runtime::OrderSystem) spawns and shuts down the actors and
//! hands out a ready-made service. [`SystemConfig`](config::SystemConfig)
//! holds the channel sizing.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```
//!
//! ## 🧪 Testing
//!
//! Service logic is tested with in-memory recording stores. Clients are tested
//! against [`framework::mock::MockClient`]. End-to-end tests under `tests/`
//! drive the full actor system.

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod framework;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod runtime;
pub mod service;
pub mod stores;

//! # Contoso Pizza
//!
//! A REST API over an in-memory menu of pizzas.
//!
//! ## Module Tour
//!
//! - [`model`] - the [`Pizza`](model::Pizza) record and its create/update payloads
//! - [`pizza_actor`] - the seeded store that owns every pizza and assigns ids
//! - [`clients`] - [`PizzaClient`](clients::PizzaClient), the typed handle to the store
//! - [`router`] - axum routes mapping HTTP requests to store calls
//! - [`lifecycle`] - [`PizzaSystem`](lifecycle::PizzaSystem) startup/shutdown and tracing setup
//! - [`config`] - YAML configuration
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -p contoso-pizza
//! curl localhost:8080/ContosoPizza
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod pizza_actor;
pub mod router;

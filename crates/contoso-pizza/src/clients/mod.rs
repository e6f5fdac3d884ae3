//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod pizza_client;

pub use pizza_client::*;

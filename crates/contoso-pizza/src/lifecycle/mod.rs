//! # System Lifecycle
//!
//! Starting, wiring and stopping the pizza store, plus logging setup.
//!
//! ## Startup
//!
//! [`PizzaSystem::new`] builds the seeded store actor and spawns it. The returned
//! system exposes a cloneable [`PizzaClient`](crate::clients::PizzaClient), which the
//! HTTP router receives through its state. The store is never a global: it lives
//! exactly as long as its system and its client clones.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the router** - axum's graceful shutdown drops the router and its client clones
//! 2. **Drop the system's client** - closes the last sender of the store's channel
//! 3. **Actor detects closure** - `receiver.recv()` returns `None`, the final size is logged
//! 4. **Await completion** - [`PizzaSystem::shutdown`] joins the actor task

pub mod pizza_system;
pub mod tracing;

pub use self::pizza_system::*;
pub use self::tracing::*;

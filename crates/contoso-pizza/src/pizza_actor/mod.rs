//! # Pizza Actor
//!
//! The store that owns every pizza record and the counter that assigns their ids.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Pizza`]
//! - [`error`] - [`PizzaError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the seeded actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use contoso_pizza::pizza_actor;
//! use contoso_pizza::model::PizzaCreate;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = pizza_actor::new(32)?;
//!     tokio::spawn(actor.run(()));
//!
//!     let pizza = client
//!         .add_pizza(PizzaCreate::new("Capricciosa", false, Decimal::new(900, 2)))
//!         .await?;
//!     assert_eq!(pizza.id.0, 3);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PizzaClient;
use crate::model::{Pizza, PizzaCreate};
use actor_framework::ResourceActor;
use rust_decimal::Decimal;

/// The records every new store starts with. They receive ids 1 and 2.
pub fn seed() -> Vec<PizzaCreate> {
    vec![
        PizzaCreate::new("Margherita", false, Decimal::new(750, 2)),
        PizzaCreate::new("Funghi", true, Decimal::new(850, 2)),
    ]
}

/// Creates a new seeded Pizza actor and its client.
pub fn new(buffer_size: usize) -> Result<(ResourceActor<Pizza>, PizzaClient), PizzaError> {
    let (actor, generic_client) = ResourceActor::with_seed(buffer_size, seed())?;
    Ok((actor, PizzaClient::new(generic_client)))
}

//! # Actor Framework
//!
//! Building blocks for in-memory resource stores owned by a single Tokio task.
//!
//! A store holds a collection of records of one type together with the counter that
//! hands out their ids. Callers never touch the collection directly: they send
//! requests through a cloneable client and the owning task answers them one at a time.
//! That gives every store the same guarantees without a lock:
//!
//! - ids are assigned in strictly increasing order and never reused, even under
//!   concurrent creates;
//! - reads observe every write that completed before them;
//! - records keep their insertion order.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Table { id: u32, seats: u8 }
//!
//! #[derive(Debug)] struct TableCreate { seats: u8 }
//! #[derive(Debug)] struct TableUpdate { seats: u8 }
//! #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32;
//!     type Create = TableCreate;
//!     type Update = TableUpdate;
//!     type Context = ();
//!     type Error = TableError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: TableCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, seats: params.seats })
//!     }
//!
//!     async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.seats = update.seats;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seed = vec![TableCreate { seats: 2 }, TableCreate { seats: 4 }];
//!     let (actor, client) = ResourceActor::<Table>::with_seed(10, seed).unwrap();
//!     tokio::spawn(actor.run(()));
//!
//!     let table = client.create(TableCreate { seats: 6 }).await.unwrap();
//!     assert_eq!(table.id, 3);
//!     assert_eq!(client.list().await.unwrap().len(), 3);
//! }
//! ```
//!
//! ## Shutdown
//!
//! The actor's loop ends when every client clone has been dropped. Await the task's
//! `JoinHandle` to know the store is gone.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from canned expectations, for testing
//! callers of a store without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

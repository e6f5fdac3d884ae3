//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type must satisfy to be held by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the identifier and payload
//! types, exposes the record's id for lookups, and provides the lifecycle hooks the actor
//! calls while creating, updating and deleting records.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! These default to `Ok(())`. Only [`ActorEntity::on_update`] must be written by hand,
//! because only the entity knows which of its fields an update overwrites.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Identity
/// The actor assigns ids from a `u32` counter starting at 1, so `Id` must be
/// constructible from `u32`. The entity stores the id it was built with and hands it
/// back through [`ActorEntity::id`]; the actor never mutates it afterwards.
///
/// # Async & Context
/// Hooks are async and receive a `Context` injected through `run()`. Use `()` when the
/// entity has no dependencies.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record. Carries no id.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id assigned to this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the assigned id and the creation payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request targets this record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

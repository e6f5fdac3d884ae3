//! # Pizza Client
//!
//! Provides a high-level API for interacting with the `Pizza` actor.
//! It wraps a `ResourceClient<Pizza>` and exposes domain-specific methods;
//! `get` and `delete` come from [`ActorClient`].
use crate::model::{Pizza, PizzaCreate, PizzaId, PizzaUpdate};
use crate::pizza_actor::PizzaError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Pizza actor.
#[derive(Clone)]
pub struct PizzaClient {
    inner: ResourceClient<Pizza>,
}

impl PizzaClient {
    pub fn new(inner: ResourceClient<Pizza>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Pizza> for PizzaClient {
    type Error = PizzaError;

    fn inner(&self) -> &ResourceClient<Pizza> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PizzaError::from(e)
    }
}

impl PizzaClient {
    /// Every pizza, in the order they were added.
    #[instrument(skip(self))]
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, PizzaError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Adds a pizza and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn add_pizza(&self, params: PizzaCreate) -> Result<Pizza, PizzaError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the pizza with `id`.
    ///
    /// Fails with [`PizzaError::NotFound`] when no pizza has that id; nothing is created.
    #[instrument(skip(self))]
    pub async fn update_pizza(&self, id: PizzaId, update: PizzaUpdate) -> Result<Pizza, PizzaError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

use crate::clients::PizzaClient;
use crate::config::StoreConfig;
use crate::pizza_actor::{self, PizzaError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to seed pizza store: {0}")]
    Seed(#[from] PizzaError),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Owns the running pizza store.
///
/// `PizzaSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and joining it at shutdown
/// - **Dependency Wiring**: handing out the [`PizzaClient`] the router is built on
///
/// Each instance is an independent store with its own seed records and id counter,
/// so tests build a fresh one per case.
///
/// # Example
///
/// ```ignore
/// let system = PizzaSystem::new(&StoreConfig::default())?;
/// let app = router(AppState::new(system.pizza_client.clone()));
/// // ... serve ...
/// system.shutdown().await?;
/// ```
pub struct PizzaSystem {
    /// Client for interacting with the Pizza actor
    pub pizza_client: PizzaClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl PizzaSystem {
    /// Creates the seeded store and spawns its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Result<Self, SystemError> {
        let (actor, pizza_client) = pizza_actor::new(config.buffer_size)?;
        let handle = tokio::spawn(actor.run(()));

        Ok(Self {
            pizza_client,
            handle,
        })
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's client and waits for the actor task to finish. The actor only
    /// exits once every other clone of the client (for example the router's) has been
    /// dropped too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Dropping the last sender makes the actor's `recv()` return None.
        drop(self.pizza_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

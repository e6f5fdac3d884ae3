//! Error types for the Pizza actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during pizza operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzaError {
    /// No pizza has the requested id.
    #[error("Pizza not found: {0}")]
    NotFound(String),

    /// The store could not be reached or did not answer.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PizzaError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PizzaError::NotFound(id),
            other => PizzaError::ActorCommunicationError(other.to_string()),
        }
    }
}

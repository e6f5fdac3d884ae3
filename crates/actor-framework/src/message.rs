//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and the `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor. One variant per store operation.
///
/// - **List**: every record, in insertion order.
/// - **Create**: assigns the next id and appends the record.
/// - **Get**: first record with a matching id, or `None`.
/// - **Update**: overwrites the matching record; `NotFound` when absent.
/// - **Delete**: removes the matching record; absence is not an error.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}

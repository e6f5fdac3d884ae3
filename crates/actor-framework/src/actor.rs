//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a collection of records
//! and its identity counter. Every read and write is a message processed in order, so the
//! collection needs no lock and two creates can never receive the same id.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// `ResourceActor<T>` is the *server* half of the framework. It owns an insertion-ordered
/// `Vec<T>` and a `u32` counter (`next_id`) and processes `ResourceRequest<T>` messages
/// one at a time inside its own Tokio task.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` (empty) or `ResourceActor::with_seed()` returns
///     the `actor` (server) and `client` (interface).
/// 2.  **Run**: spawn `actor.run(context)` in a background task.
/// 3.  **Use**: clone the client wherever requests originate.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.text })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones every record in insertion order.
/// * **Create**: takes `next_id`, increments it, builds the record via
///   `T::from_create_params`, runs `on_create`, appends, returns the stored record.
///   An id is consumed even when the hooks reject the record, so ids are never reused.
///   Once `u32::MAX` has been handed out every further create fails with
///   `FrameworkError::IdSpaceExhausted`.
/// * **Get**: linear scan for the first matching id; `None` when absent.
/// * **Update**: linear scan, `on_update` on the match, returns the new state.
///   `FrameworkError::NotFound` when absent; the collection is left untouched.
/// * **Delete**: linear scan, `on_delete`, removes and returns the record.
///   `Ok(None)` when absent.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    /// `None` once every `u32` id has been handed out.
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: Some(1),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Creates a `ResourceActor` pre-populated with `seed`.
    ///
    /// Seed payloads receive ids `1..=n` in iteration order and the counter resumes at
    /// `n + 1`. Seeding is synchronous and bypasses `on_create`, since no context exists
    /// before `run()`. A rejected payload is returned as `FrameworkError::EntityError`.
    pub fn with_seed(
        buffer_size: usize,
        seed: impl IntoIterator<Item = T::Create>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let (mut actor, client) = Self::new(buffer_size);
        for params in seed {
            let id = actor.take_id()?;
            let item = T::from_create_params(id, params)
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            actor.store.push(item);
        }
        Ok((actor, client))
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn take_id(&mut self) -> Result<T::Id, FrameworkError> {
        let id = self.next_id.ok_or(FrameworkError::IdSpaceExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(T::Id::from(id))
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Pizza" instead of "contoso_pizza::model::pizza::Pizza")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), next_id = ?self.next_id, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.take_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    // Hooks run on a copy so a failed update leaves the stored record intact.
                    let mut item = self.store[index].clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store[index] = item.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        debug!(entity_type, %id, "Delete of absent id ignored");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    if let Err(e) = self.store[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(Some(removed)));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the shop's actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// By defining one contract that all resource types (products, orders,
/// employees) satisfy, the message-processing loop is written *once* and
/// reused everywhere.
///
/// We use associated types (`Id`, `CreateParams`, ...) to enforce type safety:
/// an order actor cannot be handed a product-creation payload, the compiler
/// rejects it.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The
/// `Context` type is injected into every hook, which allows "late binding" of
/// dependencies (passing clients or the shop clock to `run()` instead of
/// `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `SetState`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::UpdateParams, _ctx: &Self::Context) -> Result<(), String>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(&mut self, action: Self::Action, _ctx: &Self::Context) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the standard CRUD lifecycle plus two extensions:
/// - **Action**: resource-specific logic that doesn't fit the CRUD model.
/// - **List**: a full scan of the store. Repository-style queries ("find by
///   category", "find by role") are client-side filters over this variant;
///   stores are small (bounded by shop inventory and staff size), so a scan
///   is fine.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its messages *sequentially* in a loop, so
/// the `store` needs no `Mutex` or `RwLock`. The actor model gives us safety
/// through exclusive ownership of state within the task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like the shop clock) that
    /// were created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "papa_pizza::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items: Vec<T> = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct PantryItem {
        id: String,
        name: String,
        stock: u32,
    }

    #[derive(Debug)]
    struct PantryItemCreate {
        name: String,
        stock: u32,
    }

    #[derive(Debug)]
    struct PantryItemUpdate {
        name: Option<String>,
    }

    // Custom Actions
    #[derive(Debug)]
    enum PantryAction {
        Consume(u32),
    }

    #[async_trait]
    impl ActorEntity for PantryItem {
        type Id = String;
        type CreateParams = PantryItemCreate;
        type UpdateParams = PantryItemUpdate;
        type Action = PantryAction;
        type ActionResult = u32;
        type Context = ();

        fn from_create_params(id: String, params: PantryItemCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                name: params.name,
                stock: params.stock,
            })
        }

        async fn on_update(&mut self, update: PantryItemUpdate, _ctx: &Self::Context) -> Result<(), String> {
            if let Some(name) = update.name {
                self.name = name;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: PantryAction, _ctx: &Self::Context) -> Result<u32, String> {
            match action {
                PantryAction::Consume(amount) => {
                    if amount > self.stock {
                        return Err(format!("only {} in stock", self.stock));
                    }
                    self.stock -= amount;
                    Ok(self.stock)
                }
            }
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        // ID Generator
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("pantry_{}", id)
        };

        // Start Actor
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));

        // 1. Create
        let payload = PantryItemCreate { name: "Flour".into(), stock: 10 };
        let id: String = client.create(payload).await.unwrap();

        // 2. Perform Action: consume stock
        let left: u32 = client.perform_action(id.clone(), PantryAction::Consume(4)).await.unwrap();
        assert_eq!(left, 6);

        // Verify state
        let item: PantryItem = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(item.stock, 6);

        // 3. Overdraw fails but leaves state intact
        let err = client.perform_action(id.clone(), PantryAction::Consume(100)).await;
        assert!(err.is_err());
        let item: PantryItem = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(item.stock, 6);

        // 4. Update
        let update = PantryItemUpdate { name: Some("Tipo 00 Flour".into()) };
        let updated = client.update(id.clone(), update).await.unwrap();
        assert_eq!(updated.name, "Tipo 00 Flour");

        // 5. Delete
        client.delete(id.clone()).await.unwrap();
        let deleted = client.get(id.clone()).await.unwrap();
        assert!(deleted.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_entities() {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("pantry_{}", counter.fetch_add(1, Ordering::SeqCst));

        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));

        for name in ["Flour", "Tomato", "Mozzarella"] {
            client
                .create(PantryItemCreate { name: name.into(), stock: 1 })
                .await
                .unwrap();
        }

        let mut names: Vec<String> = client.list().await.unwrap().into_iter().map(|i: PantryItem| i.name).collect();
        names.sort();
        assert_eq!(names, vec!["Flour", "Mozzarella", "Tomato"]);
    }
}

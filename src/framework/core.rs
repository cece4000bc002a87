//! Generic entity actor: one task owning a `HashMap<Id, Entity>`, driven over
//! an mpsc channel with a oneshot reply per request.
//!
//! [`ActorEntity`] is what an entity implements, [`ResourceActor`] serves it
//! and [`ResourceClient`] talks to it.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. ENTITY CONTRACT
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// Customers, products and orders all satisfy this contract, so the message
/// loop is written once. Associated types keep the payloads apart: a
/// `CustomerCreate` can never reach the product actor.
///
/// # Hooks and Context
/// Hooks are async and receive the `Context` passed to [`ResourceActor::run`],
/// so dependencies can be bound after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier. Allocated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g., `CheckStock`).
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the allocated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. Inside `UpdateMany` this runs on a copy.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Entity-specific operation, e.g. reading a stock level.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. REQUESTS AND FAILURES
// =============================================================================

/// Failures raised by the engine rather than by an entity.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(String),
}

/// Reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// The variants follow CRUD plus `Action` for resource-specific logic.
/// `GetMany` and `UpdateMany` are the batch forms a repository needs: one
/// round trip for a catalog lookup, one message for an inventory write.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    UpdateMany {
        updates: Vec<(T::Id, T::Update)>,
        respond_to: Response<Vec<T>>,
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
// 3. ACTOR (owns the map, serves requests)
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// Owns the `store` and the receiving end of the channel. Messages are handled
/// one at a time, so the store needs no lock and a batch is never interleaved
/// with another request.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Product" instead of "order_intake::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = self.get_many(&ids);
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::UpdateMany {
                    updates,
                    respond_to,
                } => {
                    debug!(entity_type, count = updates.len(), "UpdateMany");
                    let result = self.update_many(updates, &context).await;
                    match &result {
                        Ok(items) => info!(entity_type, count = items.len(), "Batch committed"),
                        Err(e) => warn!(entity_type, error = %e, "Batch rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.act(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");

        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| rejected(entity_type, e))?;
        item.on_create(context).await.map_err(|e| rejected(entity_type, e))?;

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");

        let item = self.existing(&id)?;
        item.on_update(update, context)
            .await
            .map_err(|e| rejected(entity_type, e))?;
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");

        self.existing(&id)?
            .on_delete(context)
            .await
            .map_err(|e| rejected(entity_type, e))?;
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn act(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");

        self.existing(&id)?
            .handle_action(action, context)
            .await
            .map_err(|e| rejected(entity_type, e))
    }

    fn existing(&mut self, id: &T::Id) -> Result<&mut T, FrameworkError> {
        let entity_type = self.entity_type;
        self.store.get_mut(id).ok_or_else(|| {
            warn!(entity_type, %id, "Not found");
            FrameworkError::NotFound(id.to_string())
        })
    }

    /// Stored entities among `ids`, in request order. Unknown and repeated ids
    /// are skipped.
    fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    /// Applies every update to a copy and commits only when all succeed.
    async fn update_many(
        &mut self,
        updates: Vec<(T::Id, T::Update)>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        if let Some((id, _)) = updates.iter().find(|(id, _)| !self.store.contains_key(id)) {
            return Err(FrameworkError::NotFound(id.to_string()));
        }

        // Staged copies keyed by id so repeated ids see earlier updates.
        let mut staged: HashMap<T::Id, T> = HashMap::with_capacity(updates.len());
        let mut order = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            if !staged.contains_key(&id) {
                if let Some(current) = self.store.get(&id) {
                    staged.insert(id.clone(), current.clone());
                    order.push(id.clone());
                }
            }
            let item = staged
                .get_mut(&id)
                .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
            item.on_update(update, context)
                .await
                .map_err(|e| FrameworkError::Entity(e.to_string()))?;
        }

        let mut committed = Vec::with_capacity(order.len());
        for id in order {
            if let Some(item) = staged.remove(&id) {
                self.store.insert(id, item.clone());
                committed.push(item);
            }
        }
        Ok(committed)
    }
}

/// Logs a hook failure and wraps it for the caller.
fn rejected(entity_type: &str, e: impl std::error::Error) -> FrameworkError {
    warn!(entity_type, error = %e, "Rejected by entity");
    FrameworkError::Entity(e.to_string())
}

// =============================================================================
// 4. CLIENT (cloneable sender half)
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
///
/// Holds only the sender, so cloning is cheap.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn update_many(
        &self,
        updates: Vec<(T::Id, T::Update)>,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateMany {
            updates,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
    use crate::product_actor::{ProductAction, ProductActionResult};
    use rust_decimal::Decimal;

    fn widget(quantity: u32) -> ProductCreate {
        ProductCreate {
            name: "Widget".into(),
            price: Decimal::new(1999, 2),
            quantity,
        }
    }

    fn set_quantity(quantity: u32) -> ProductUpdate {
        ProductUpdate {
            price: None,
            quantity: Some(quantity),
        }
    }

    #[tokio::test]
    async fn test_resource_actor_crud_and_actions() {
        let (actor, client) = ResourceActor::<Product>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(widget(7)).await.unwrap();
        assert_eq!(id, ProductId(1));

        let stock = client
            .perform_action(id.clone(), ProductAction::CheckStock)
            .await
            .unwrap();
        assert!(matches!(stock, ProductActionResult::CheckStock(7)));

        let updated = client.update(id.clone(), set_quantity(3)).await.unwrap();
        assert_eq!(updated.quantity, 3);

        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id.clone()).await.unwrap().is_none());

        let missing = client.update(id, set_quantity(1)).await;
        assert_eq!(missing.unwrap_err(), FrameworkError::NotFound("product_1".into()));
    }

    #[tokio::test]
    async fn test_get_many_keeps_request_order_and_skips_unknown() {
        let (actor, client) = ResourceActor::<Product>::new(10);
        tokio::spawn(actor.run(()));

        let first = client.create(widget(1)).await.unwrap();
        let second = client.create(widget(2)).await.unwrap();

        let found = client
            .get_many(vec![second.clone(), ProductId(99), first.clone(), second.clone()])
            .await
            .unwrap();

        let ids: Vec<ProductId> = found.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let (actor, client) = ResourceActor::<Product>::new(10);
        tokio::spawn(actor.run(()));

        let first = client.create(widget(5)).await.unwrap();
        let second = client.create(widget(6)).await.unwrap();

        let result = client
            .update_many(vec![
                (first.clone(), set_quantity(0)),
                (ProductId(42), set_quantity(0)),
            ])
            .await;
        assert_eq!(result.unwrap_err(), FrameworkError::NotFound("product_42".into()));
        assert_eq!(client.get(first.clone()).await.unwrap().unwrap().quantity, 5);

        let updated = client
            .update_many(vec![
                (second.clone(), set_quantity(1)),
                (first.clone(), set_quantity(2)),
            ])
            .await
            .unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(client.get(first).await.unwrap().unwrap().quantity, 2);
        assert_eq!(client.get(second).await.unwrap().unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Product>::new(1);
        drop(actor);

        let result = client.get(ProductId(1)).await;
        assert_eq!(result.unwrap_err(), FrameworkError::ActorClosed);
    }
}

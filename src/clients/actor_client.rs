//! Shared read and delete operations for the entity clients.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by every entity client on top of its [`ResourceClient`].
///
/// The entity error only has to say how to absorb a [`FrameworkError`];
/// `get` and `delete` then come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: From<FrameworkError> + Send;

    fn inner(&self) -> &ResourceClient<T>;

    /// `Ok(None)` when no entity has this id.
    #[tracing::instrument(skip(self, id), fields(%id))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending get");
        Ok(self.inner().get(id).await?)
    }

    #[tracing::instrument(skip(self, id), fields(%id))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending delete");
        Ok(self.inner().delete(id).await?)
    }
}

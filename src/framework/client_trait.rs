//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `delete`
//! on top of the wrapped [`ResourceClient`], with errors mapped into the resource's own
//! error type.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

//! # ActorEntity Trait
//!
//! The contract every resource (User, Product, Order) implements to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the associated
//! types for IDs, DTOs, actions, context and errors, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//!
//! The defaults do nothing, so an entity only overrides what it needs.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor is started ("late binding" of dependencies):
/// the order actor receives the user and product clients this way.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// listings come back in creation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `ReserveStock`, `Deliver`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. Travels boxed in `FrameworkError::EntityError`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// A natural key that must be unique across the store (e.g. a product code).
    /// The actor rejects a create whose key is already taken.
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Validation and side effects on other actors belong here.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

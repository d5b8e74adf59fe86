//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests to an actor
//! - [`ActorClient`] - Shared read/delete operations for domain clients
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients and actors without spawning their dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

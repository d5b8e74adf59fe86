//! # User Actor
//!
//! The simplest actor in the shop: no dependencies (`Context = ()`) and no custom
//! actions. It stores registered users, whose roles the [`auth`](crate::auth) rule
//! reads on every gated operation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(()));
//! let id = client.create_user(params).await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}

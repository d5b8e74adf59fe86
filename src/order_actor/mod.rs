//! # Order Actor
//!
//! Places orders and drives them through their lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]:
//!   placement validation and stock reservation in `on_create`, transitions in `handle_action`
//! - [`state`] - the [`Transition`] state machine
//! - [`actions`] - [`OrderAction`], one per transition, naming the acting user
//! - [`error`] - [`OrderError`] with the messages shown to users
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor runs with `(UserClient, ProductClient)` as its context:
//!
//! ```rust,ignore
//! let (actor, orders) = order_actor::new(32, user_client.clone());
//! tokio::spawn(actor.run((user_client, product_client)));
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use crate::clients::{OrderClient, UserClient};
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// `users` lets the client authorize transitions before they reach the actor.
pub fn new(buffer_size: usize, users: UserClient) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client, users))
}

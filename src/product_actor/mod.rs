//! # Product Actor
//!
//! Catalog and inventory. Beyond CRUD, stock is managed with custom actions
//! ([`ProductAction`]): the order actor reserves stock when an order is placed and
//! adds it back when an order is returned.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = product_actor::new(32, user_client);
//! tokio::spawn(actor.run(()));
//!
//! // Role-gated catalog operations name the acting user
//! let id = client.add_product(admin_id, params).await?;
//!
//! // Stock actions used by the order actor
//! client.reserve_stock(id, 5).await?;
//! client.restock(id, 5).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{ProductClient, UserClient};
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
///
/// The actor itself has no dependencies; the client carries `users` to authorize
/// catalog operations before they reach the actor.
pub fn new(buffer_size: usize, users: UserClient) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client, users))
}

//! # Online Shop
//!
//! An order-management backend built from resource actors: users, a product
//! catalog with stock, and orders that move through placed → delivered → returned
//! (or placed → canceled).
//!
//! ## Core Concepts
//!
//! ### One actor per resource
//! `ResourceActor<T: ActorEntity>` owns the store of one entity type and handles one
//! message at a time. That sequential loop is the transaction boundary: placing an
//! order (check buyer, check products, reserve stock) or returning one (check state,
//! restock, mark returned) is a single message to the order actor and can't
//! interleave with another placement or transition.
//!
//! ### Context injection
//! Dependencies are injected at runtime via `run(context)`. The order actor runs with
//! `(UserClient, ProductClient)`; the user and product actors need nothing.
//!
//! ### One permission table
//! Every role-gated operation is authorized by [`auth::authorize`] against the
//! table in [`auth::Operation::allowed_roles`].
//!
//! ### Typed errors
//! Each actor has its own error type (`UserError`, `ProductError`, `OrderError`).
//! Entity errors cross the actor boundary boxed in
//! [`FrameworkError::EntityError`](framework::FrameworkError::EntityError) and the
//! clients downcast them back, so callers match on domain variants.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client, entity trait and test mocks.
//! - [`model`]: [`User`](model::User), [`Product`](model::Product), [`Order`](model::Order).
//! - [`auth`]: the permission table.
//! - [`user_actor`], [`product_actor`], [`order_actor`]: the `ActorEntity` implementations.
//! - [`clients`]: typed facades over the actors.
//! - [`lifecycle`]: [`ShopSystem`](lifecycle::ShopSystem), configuration, tracing setup.
//! - [`http`]: the REST API.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod auth;
pub mod clients;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

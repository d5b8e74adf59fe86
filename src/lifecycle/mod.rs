//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors, plus configuration and tracing setup.
//!
//! Actors are created without dependencies and receive them at `run(context)`:
//! the order actor gets `(UserClient, ProductClient)`, the others `()`. The dependency
//! graph (orders → users, products) is acyclic, so dropping every client is enough to
//! shut the system down.

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::setup_tracing;

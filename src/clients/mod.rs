//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](crate::framework::ActorClient) for the shared
//! `get`/`list`/`delete` and maps [`FrameworkError`](crate::framework::FrameworkError)
//! back into its actor's error type.

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::*;
pub use product_client::*;
pub use user_client::*;

//! Pure data structures managed by the resource actors.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

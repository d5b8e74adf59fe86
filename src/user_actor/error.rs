//! Error types for the User actor.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

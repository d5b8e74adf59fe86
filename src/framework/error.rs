//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity errors are carried boxed in
//! [`FrameworkError::EntityError`] and recovered by the typed clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original framework error untouched when it carries something else.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<UserError>() {
            Ok(err) => err,
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing user is an error.
    #[instrument(skip(self))]
    pub async fn user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id).await?.ok_or(UserError::NotFound(id))
    }
}

//! Entity trait implementation for the User domain type.
//!
//! Users are registered once and only read afterwards, so updates and actions are
//! no-ops. See the trait implementation on [`User`] for method documentation.

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    /// Creates a new User from registration parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            first_name: params.first_name,
            surname: params.surname,
            roles: params.roles,
            address: params.address,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}

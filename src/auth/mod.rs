//! # Authorization
//!
//! One permission table ([`Operation::allowed_roles`]) and one rule ([`authorize`]).
//! Every role-gated operation in the shop goes through here; actors never compare
//! roles themselves.
//!
//! | Operation      | Allowed roles   |
//! |----------------|-----------------|
//! | AddProduct     | admin           |
//! | UpdateProduct  | admin, editor   |
//! | DeleteProduct  | admin           |
//! | AddStock       | admin           |
//! | PlaceOrder     | client          |
//! | DeliverOrder   | expeditor       |
//! | CancelOrder    | client          |
//! | ReturnOrder    | client          |

use crate::clients::UserClient;
use crate::framework::ActorClient;
use crate::model::{Role, User, UserId};
use thiserror::Error;
use tracing::{debug, instrument};

/// Every role-gated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    AddStock,
    PlaceOrder,
    DeliverOrder,
    CancelOrder,
    ReturnOrder,
}

impl Operation {
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Operation::AddProduct => &[Role::Admin],
            Operation::UpdateProduct => &[Role::Admin, Role::Editor],
            Operation::DeleteProduct => &[Role::Admin],
            Operation::AddStock => &[Role::Admin],
            Operation::PlaceOrder => &[Role::Client],
            Operation::DeliverOrder => &[Role::Expeditor],
            Operation::CancelOrder => &[Role::Client],
            Operation::ReturnOrder => &[Role::Client],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Utilizatorul nu are permisiunea de a executa aceasta operatiune!")]
pub struct AccessDenied {
    pub operation: Operation,
}

/// Failure to authorize a user looked up by id.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
    #[error(transparent)]
    Denied(#[from] AccessDenied),
    #[error("User lookup failed: {0}")]
    Lookup(String),
}

/// Allows the user if any of their roles is allowed for `operation`.
pub fn authorize(user: &User, operation: Operation) -> Result<(), AccessDenied> {
    let allowed = operation.allowed_roles();
    if user.roles.iter().any(|role| allowed.contains(role)) {
        Ok(())
    } else {
        Err(AccessDenied { operation })
    }
}

/// Resolves the acting user and authorizes them, returning the user on success.
#[instrument(skip(users))]
pub async fn authorize_user(
    users: &UserClient,
    user_id: UserId,
    operation: Operation,
) -> Result<User, AuthError> {
    let user = users
        .get(user_id)
        .await
        .map_err(|e| AuthError::Lookup(e.to_string()))?
        .ok_or(AuthError::UnknownUser(user_id))?;
    authorize(&user, operation)?;
    debug!(%user_id, "Authorized");
    Ok(user)
}

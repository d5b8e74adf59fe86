//! Shop users and their roles.
//!
//! A user's roles decide which operations they may perform; see
//! [`auth`](crate::auth) for the permission table.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Editor,
    Client,
    Expeditor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub number: u32,
    pub zipcode: String,
}

/// Represents a registered user.
///
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`user_actor::entity`](crate::user_actor::entity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub surname: String,
    pub roles: Vec<Role>,
    pub address: Address,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Payload for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub first_name: String,
    pub surname: String,
    pub roles: Vec<Role>,
    pub address: Address,
}

//! User account types.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Credentials submitted by the sign-up and sign-in forms.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A stored user account.
///
/// Holds the password hash -- never serialize this to API responses.
/// Use [`AuthenticatedUser`] for external-facing output.
#[derive(Debug, Clone)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password_hash: String,
}

/// The identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: EntityId,
    pub username: String,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

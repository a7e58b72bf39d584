//! Authentication result types
//!
//! Outward-facing views of a user. None of them carry the password hash.

use serde::Serialize;

use super::store::User;
use crate::utils::time::to_iso8601;

/// Minimal identity attached to authenticated requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: u64,
    pub username: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// User as listed and returned from registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
    pub created_at: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: to_iso8601(&user.created_at),
        }
    }
}

/// Result of a registration
#[derive(Debug, Clone)]
pub struct RegistrationResult {
    pub user: PublicUser,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: Identity,
    pub auth_token: String,
}

//! Response bodies

use serde::Serialize;

use crate::auth::{Identity, PublicUser};

pub const REGISTERED: &str = "User registered successfully";
pub const LOGGED_IN: &str = "Login successful";
pub const ACCESS_GRANTED: &str = "Access granted to protected resource";
pub const USER_LIST: &str = "User list retrieved successfully";
pub const TOKEN_INSTRUCTIONS: &str = "Send this token in the Authorization header of every request to a protected endpoint, e.g. Authorization: <authToken>. It contains your password Base64-encoded, so keep it secret.";

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: Identity,
    pub auth_token: String,
    pub instructions: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretData {
    pub content: &'static str,
    pub accessed_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub user: Identity,
    pub secret_data: SecretData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub message: &'static str,
    pub total_users: usize,
    pub users: Vec<PublicUser>,
}

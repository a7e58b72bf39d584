//! Request handlers
//!
//! Thin wrappers: decode the body, call into `auth`, shape the JSON.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::warn;
use serde_json::{Value, json};

use super::responses::*;
use crate::auth::{self, CredentialsInput, Identity, PublicUser};
use crate::error::ApiError;
use crate::server::AppState;
use crate::utils::time::now_iso8601;

/// A body that is missing entirely counts as empty. Oversized bodies are a
/// 413, anything else unparseable is a 400.
fn credentials_from(body: Result<Json<CredentialsInput>, JsonRejection>) -> Result<CredentialsInput, ApiError> {
    match body {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(CredentialsInput::default()),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized request body: {}", rejection.body_text());
            Err(ApiError::PayloadTooLarge("Request body is too large".into()))
        }
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::Validation("Request body must be valid JSON".into()))
        }
    }
}

/// GET /, the endpoint directory
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Basic Authentication API",
        "endpoints": {
            "GET /": "This endpoint directory",
            "POST /register": "Register with {\"username\", \"password\"}",
            "POST /login": "Log in with {\"username\", \"password\"} to receive a Basic auth token",
            "GET /api/protected": "Protected resource, requires Authorization: Basic <base64(username:password)>",
            "GET /api/users": "List registered users",
        }
    }))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let input = credentials_from(body)?;
    let result = auth::register(
        &state.store,
        &state.hasher,
        input.username.as_deref(),
        input.password.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: REGISTERED,
            user: result.user,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsInput>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let input = credentials_from(body)?;
    let result = auth::login(
        &state.store,
        &state.hasher,
        input.username.as_deref(),
        input.password.as_deref(),
    )
    .await?;

    Ok(Json(LoginResponse {
        message: LOGGED_IN,
        user: result.user,
        auth_token: result.auth_token,
        instructions: TOKEN_INSTRUCTIONS,
    }))
}

/// GET /api/protected, behind `require_basic_auth`
pub async fn protected(Extension(identity): Extension<Identity>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: ACCESS_GRANTED,
        user: identity,
        secret_data: SecretData {
            content: "This is secret data only visible to authenticated users",
            accessed_at: now_iso8601(),
        },
    })
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    let users: Vec<PublicUser> = state
        .store
        .lock()
        .await
        .users()
        .iter()
        .map(PublicUser::from)
        .collect();

    Json(UserListResponse {
        message: USER_LIST,
        total_users: users.len(),
        users,
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".into())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed for this endpoint".into())
}

//! Authentication guard
//!
//! Sits in front of protected routes. Every request pays for a fresh bcrypt
//! verification; nothing is cached between calls.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth;
use crate::error::{ApiError, AuthError};
use crate::server::AppState;

/// Verifies Basic credentials and attaches an `Identity` to the request.
///
/// Rejections carry a `WWW-Authenticate` challenge, except for undecodable
/// credentials unless `challenge_on_malformed` is set.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match auth::authenticate(&state.store, &state.hasher, authorization).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        Err(error) => Err(rejection(&state, error)),
    }
}

fn rejection(state: &AppState, error: AuthError) -> ApiError {
    match error {
        AuthError::MalformedCredentials if !state.config.challenge_on_malformed => {
            ApiError::from(error)
        }
        AuthError::MissingCredentials
        | AuthError::MalformedCredentials
        | AuthError::UserNotFound(_)
        | AuthError::InvalidPassword(_) => ApiError::challenge(&error, state.config.challenge()),
        other => ApiError::from(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn state(challenge_on_malformed: bool) -> AppState {
        AppState::new(ServerConfig {
            bcrypt_cost: 4,
            challenge_on_malformed,
            ..ServerConfig::default()
        })
    }

    fn challenge_of(error: ApiError) -> Option<String> {
        match error {
            ApiError::Authentication { challenge, .. } => challenge,
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[test]
    fn test_challenge_branches() {
        let state = state(false);
        let expected = Some("Basic realm=\"API Authentication\"".to_string());

        assert_eq!(challenge_of(rejection(&state, AuthError::MissingCredentials)), expected);
        assert_eq!(
            challenge_of(rejection(&state, AuthError::UserNotFound("x".into()))),
            expected
        );
        assert_eq!(
            challenge_of(rejection(&state, AuthError::InvalidPassword("x".into()))),
            expected
        );
        assert_eq!(challenge_of(rejection(&state, AuthError::MalformedCredentials)), None);
    }

    #[test]
    fn test_malformed_challenge_can_be_normalized() {
        let state = state(true);
        assert!(challenge_of(rejection(&state, AuthError::MalformedCredentials)).is_some());
    }
}

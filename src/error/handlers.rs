//! Error handlers
//!
//! Converts `ApiError` into HTTP responses.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use serde_json::json;

use crate::error::types::{ApiError, INTERNAL_ERROR_MESSAGE};

/// Log an error server-side
pub fn handle_error(err: &ApiError) {
    match err {
        ApiError::Internal(_) => error!("Request failed: {}", err),
        _ => warn!("Request rejected: {}", err),
    }
}

/// Convert error to HTTP status code
pub fn error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
        ApiError::Authentication { .. } => StatusCode::UNAUTHORIZED,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        handle_error(&self);
        let status = error_to_status(&self);

        let (message, challenge) = match self {
            ApiError::Validation(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::PayloadTooLarge(msg) => (msg, None),
            ApiError::Authentication { message, challenge } => (message, challenge),
            ApiError::Internal(_) => (INTERNAL_ERROR_MESSAGE.to_string(), None),
        };

        let mut response = (status, Json(json!({ "message": message }))).into_response();

        if let Some(value) = challenge.and_then(|c| HeaderValue::from_str(&c).ok()) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, value);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_to_status(&ApiError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status(&ApiError::Conflict("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_to_status(&ApiError::PayloadTooLarge("x".into())),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            error_to_status(&ApiError::MethodNotAllowed("x".into())),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            error_to_status(&ApiError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_challenge_header_is_set() {
        let response = ApiError::Authentication {
            message: "Authentication required".into(),
            challenge: Some("Basic realm=\"test\"".into()),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"test\""
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("bcrypt exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}

//! HTTP API
//!
//! Routes, handlers and JSON response bodies.

pub mod handlers;
pub mod responses;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};

use crate::middleware::{log_requests, require_basic_auth};
use crate::server::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/protected", get(handlers::protected))
        .route_layer(from_fn_with_state(state.clone(), require_basic_auth));

    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/api/users", get(handlers::list_users))
        .merge(protected)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(from_fn(log_requests))
}

//! Server middleware
//!
//! Provides request logging and the Basic authentication guard.

pub mod guard;
pub mod logging;

pub use guard::require_basic_auth;
pub use logging::log_requests;

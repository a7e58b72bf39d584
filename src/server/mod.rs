//! Server core functionality
//!
//! Binds the listener and serves the API.

pub mod core;
pub mod state;

pub use self::core::Server;
pub use state::AppState;

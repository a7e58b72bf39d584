pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod server;
pub mod utils;

pub use api::build_router;
pub use config::ServerConfig;
pub use server::{AppState, Server};

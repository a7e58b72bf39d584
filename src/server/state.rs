//! Shared request state

use std::sync::Arc;

use crate::auth::{CredentialStore, PasswordHasher, SharedStore};
use crate::config::ServerConfig;

/// State cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub hasher: PasswordHasher,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fresh, empty store with a hasher tuned from `config`
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: CredentialStore::new().shared(),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            config: Arc::new(config),
        }
    }
}

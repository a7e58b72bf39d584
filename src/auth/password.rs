//! Password hashing
//!
//! bcrypt with a configurable cost. Both operations are CPU-bound, so they run
//! on tokio's blocking pool.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::PasswordError;

/// Plaintext behind the hash that unknown usernames are checked against
const DUMMY_PASSWORD: &str = "unknown-user-placeholder";

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Salted, irreversible hash of `plaintext`
    pub async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| PasswordError::Task(e.to_string()))?
            .map_err(PasswordError::from)
    }

    /// Checks `plaintext` against a stored hash.
    ///
    /// A mismatch is `Ok(false)`. Only a corrupt hash or a failed task is an error.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| PasswordError::Task(e.to_string()))?
            .map_err(PasswordError::from)
    }

    /// Runs a full verify for a username that has no stored hash, so the
    /// response takes as long as a wrong password would. Always `Ok(false)`.
    ///
    /// The dummy hash is built once per hasher, at the configured cost.
    pub async fn verify_unknown(&self, plaintext: &str) -> Result<bool, PasswordError> {
        let dummy = self
            .dummy_hash
            .get_or_try_init(|| self.hash(DUMMY_PASSWORD))
            .await?;
        self.verify(plaintext, dummy).await?;
        Ok(false)
    }

    #[cfg(test)]
    pub(crate) fn dummy_hash(&self) -> Option<&str> {
        self.dummy_hash.get().map(String::as_str)
    }
}

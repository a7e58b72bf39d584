//! Credential storage
//!
//! Append-only, in-memory user table. Lookups are a linear scan, which is
//! fine at the scale this server is meant for.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A registered user. Never serialized directly; see `PublicUser`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Ordered collection of users, unique by username
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: Vec<User>,
}

/// Store handle shared between request handlers.
///
/// Check-then-append sequences must hold the lock for their whole duration.
pub type SharedStore = Arc<Mutex<CredentialStore>>;

impl CredentialStore {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Exact, case-sensitive match
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Adds a user to the end. The caller has already checked uniqueness and
    /// taken the id from `next_id`.
    pub fn append(&mut self, user: User) {
        debug_assert!(self.find_by_username(&user.username).is_none());
        debug_assert!(user.id >= self.next_id());
        self.users.push(user);
    }

    /// Ids start at 1 and are never reused since nothing is ever removed.
    pub fn next_id(&self) -> u64 {
        self.users.last().map_or(1, |user| user.id + 1)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

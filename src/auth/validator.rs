//! Authentication validator
//!
//! Registration, login and per-request authentication, independent of HTTP.

use chrono::Utc;

use super::credentials::{encode_basic_token, parse_authorization};
use super::password::PasswordHasher;
use super::results::{Identity, LoginResult, PublicUser, RegistrationResult};
use super::store::{SharedStore, User};
use crate::error::AuthError;
use crate::utils::logging::log_auth_event;
use crate::utils::validation::required_pair;

/// Creates a user. Appends exactly once on success and never on failure.
pub async fn register(
    store: &SharedStore,
    hasher: &PasswordHasher,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<RegistrationResult, AuthError> {
    let (username, password) = required_pair(username, password).ok_or(AuthError::MissingFields)?;

    // Cheap early rejection so duplicates don't pay for a hash
    if store.lock().await.find_by_username(username).is_some() {
        log_auth_event("register", username, false, Some("username taken"));
        return Err(AuthError::UsernameTaken(username.to_string()));
    }

    let password_hash = hasher.hash(password).await?;

    let mut guard = store.lock().await;
    // Re-check under the lock: another request may have registered the name
    // while we were hashing.
    if guard.find_by_username(username).is_some() {
        log_auth_event("register", username, false, Some("username taken"));
        return Err(AuthError::UsernameTaken(username.to_string()));
    }

    let user = User {
        id: guard.next_id(),
        username: username.to_string(),
        password_hash,
        created_at: Utc::now(),
    };
    let public = PublicUser::from(&user);
    guard.append(user);
    drop(guard);

    log_auth_event("register", username, true, None);
    Ok(RegistrationResult { user: public })
}

/// Checks credentials and issues a Basic token.
///
/// Unknown users and wrong passwords produce distinct variants for logging but
/// share one client-facing message.
pub async fn login(
    store: &SharedStore,
    hasher: &PasswordHasher,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<LoginResult, AuthError> {
    let (username, password) = required_pair(username, password).ok_or(AuthError::MissingFields)?;

    let user = verify_credentials(store, hasher, username, password).await?;
    log_auth_event("login", username, true, None);

    Ok(LoginResult {
        auth_token: encode_basic_token(username, password),
        user,
    })
}

/// Resolves an `Authorization` header to an identity
pub async fn authenticate(
    store: &SharedStore,
    hasher: &PasswordHasher,
    authorization: Option<&str>,
) -> Result<Identity, AuthError> {
    let credentials = parse_authorization(authorization)?;
    verify_credentials(store, hasher, &credentials.username, &credentials.password).await
}

async fn verify_credentials(
    store: &SharedStore,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    // Clone out of the store so the lock isn't held across the hash check
    let found = {
        let guard = store.lock().await;
        guard
            .find_by_username(username)
            .map(|user| (Identity::from(user), user.password_hash.clone()))
    };

    let Some((identity, password_hash)) = found else {
        hasher.verify_unknown(password).await?;
        log_auth_event("authenticate", username, false, Some("unknown user"));
        return Err(AuthError::UserNotFound(username.to_string()));
    };

    if hasher.verify(password, &password_hash).await? {
        Ok(identity)
    } else {
        log_auth_event("authenticate", username, false, Some("wrong password"));
        Err(AuthError::InvalidPassword(username.to_string()))
    }
}

//! Error types
//!
//! Defines domain-specific error types for credential handling and the
//! HTTP-facing error returned by every handler.

use std::fmt;

/// Password hashing errors
#[derive(Debug)]
pub enum PasswordError {
    Hashing(bcrypt::BcryptError),
    Task(String),
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::Hashing(e) => write!(f, "Password hashing failed: {}", e),
            PasswordError::Task(msg) => write!(f, "Hashing task failed: {}", msg),
        }
    }
}

impl std::error::Error for PasswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PasswordError::Hashing(e) => Some(e),
            PasswordError::Task(_) => None,
        }
    }
}

impl From<bcrypt::BcryptError> for PasswordError {
    fn from(error: bcrypt::BcryptError) -> Self {
        PasswordError::Hashing(error)
    }
}

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    MissingFields,
    UsernameTaken(String),
    MissingCredentials,
    MalformedCredentials,
    UserNotFound(String),
    InvalidPassword(String),
    Password(PasswordError),
}

impl AuthError {
    /// Message safe to show the client. Never names the failing field.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::MissingFields => "Username and password are required",
            AuthError::UsernameTaken(_) => "Username already exists",
            AuthError::MissingCredentials => "Authentication required",
            AuthError::MalformedCredentials => "Invalid authentication credentials format",
            AuthError::UserNotFound(_) | AuthError::InvalidPassword(_) => {
                "Invalid username or password"
            }
            AuthError::Password(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Missing username or password"),
            AuthError::UsernameTaken(u) => write!(f, "Username already taken: {}", u),
            AuthError::MissingCredentials => write!(f, "Missing Basic credentials"),
            AuthError::MalformedCredentials => write!(f, "Malformed Basic credentials"),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Invalid password for user: {}", u),
            AuthError::Password(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Password(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(error: PasswordError) -> Self {
        AuthError::Password(error)
    }
}

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned by HTTP handlers
///
/// `Internal` carries a detail that is logged, never sent.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Conflict(String),
    Authentication {
        message: String,
        challenge: Option<String>,
    },
    NotFound(String),
    MethodNotAllowed(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    /// Authentication failure with a `WWW-Authenticate` challenge attached
    pub fn challenge(error: &AuthError, challenge: String) -> Self {
        ApiError::Authentication {
            message: error.client_message().to_string(),
            challenge: Some(challenge),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Authentication { message, .. } => {
                write!(f, "Authentication error: {}", message)
            }
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::MissingFields => ApiError::Validation(error.client_message().into()),
            AuthError::UsernameTaken(_) => ApiError::Conflict(error.client_message().into()),
            AuthError::MissingCredentials
            | AuthError::MalformedCredentials
            | AuthError::UserNotFound(_)
            | AuthError::InvalidPassword(_) => ApiError::Authentication {
                message: error.client_message().into(),
                challenge: None,
            },
            AuthError::Password(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_and_wrong_password_look_identical() {
        let unknown = AuthError::UserNotFound("ghost".into());
        let wrong = AuthError::InvalidPassword("alice".into());
        assert_eq!(unknown.client_message(), wrong.client_message());
        assert!(!unknown.client_message().contains("ghost"));
    }

    #[test]
    fn test_auth_error_mapping() {
        assert!(matches!(
            ApiError::from(AuthError::MissingFields),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::UsernameTaken("alice".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::MalformedCredentials),
            ApiError::Authentication {
                challenge: None,
                ..
            }
        ));
        assert!(matches!(
            ApiError::from(AuthError::Password(PasswordError::Task("panicked".into()))),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_internal_detail_stays_out_of_client_message() {
        let error = AuthError::Password(PasswordError::Task("worker panicked".into()));
        assert_eq!(error.client_message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("worker panicked"));
    }
}

//! Authentication system
//!
//! Handles credential storage, password hashing, Basic token encoding and
//! the register/login/authenticate operations built on them.

pub mod credentials;
pub mod password;
pub mod results;
pub mod store;
pub mod validator;

pub use credentials::{Credentials, CredentialsInput, encode_basic_token, parse_authorization};
pub use password::PasswordHasher;
pub use results::{Identity, LoginResult, PublicUser, RegistrationResult};
pub use store::{CredentialStore, SharedStore, User};
pub use validator::{authenticate, login, register};

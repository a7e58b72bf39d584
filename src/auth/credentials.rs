//! Basic credentials
//!
//! Builds `Basic <base64(username:password)>` tokens and parses them back out
//! of `Authorization` headers.
//!
//! The token carries the plaintext password, only Base64-encoded. That is how
//! the Basic scheme works; treat a token as sensitive as the password itself.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::Deserialize;

use crate::error::AuthError;

pub const BASIC_SCHEME: &str = "Basic ";

/// Standard alphabet. Encodes with padding, decodes with or without it.
const BASIC_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// JSON body accepted by `/register` and `/login`
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Username and password decoded from an `Authorization` header
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Build the value a client sends in its `Authorization` header
pub fn encode_basic_token(username: &str, password: &str) -> String {
    format!(
        "{}{}",
        BASIC_SCHEME,
        BASIC_ENGINE.encode(format!("{}:{}", username, password))
    )
}

/// Parse an `Authorization` header value.
///
/// Absent or non-Basic headers are `MissingCredentials`. Anything that fails
/// to decode into a non-empty `username:password` pair is `MalformedCredentials`.
pub fn parse_authorization(header: Option<&str>) -> Result<Credentials, AuthError> {
    let encoded = header
        .and_then(|value| value.strip_prefix(BASIC_SCHEME))
        .ok_or(AuthError::MissingCredentials)?;

    let decoded = BASIC_ENGINE
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;

    match decoded.split_once(':') {
        Some((username, password)) if !username.is_empty() && !password.is_empty() => {
            Ok(Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
        }
        _ => Err(AuthError::MalformedCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn header_for(raw: &str) -> String {
        format!("{}{}", BASIC_SCHEME, STANDARD.encode(raw))
    }

    #[test]
    fn test_token_is_reversible() {
        let token = encode_basic_token("alice", "pw1");
        assert_eq!(token, "Basic YWxpY2U6cHcx");

        // The token is not a secret-preserving transform: anyone holding it
        // recovers the password.
        let decoded = STANDARD.decode(token.strip_prefix(BASIC_SCHEME).unwrap()).unwrap();
        assert_eq!(decoded, b"alice:pw1");
    }

    #[test]
    fn test_parse_valid_header() {
        let credentials = parse_authorization(Some("Basic YWxpY2U6cHcx")).unwrap();
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "pw1");
    }

    #[test]
    fn test_padding_is_optional_when_decoding() {
        let padded = parse_authorization(Some("Basic YWxpY2U6cHcxeA==")).unwrap();
        let unpadded = parse_authorization(Some("Basic YWxpY2U6cHcxeA")).unwrap();

        assert_eq!(padded, unpadded);
        assert_eq!(unpadded.username, "alice");
        assert_eq!(unpadded.password, "pw1x");
    }

    #[test]
    fn test_tokens_are_padded() {
        assert_eq!(encode_basic_token("alice", "pw1x"), "Basic YWxpY2U6cHcxeA==");
    }

    #[test]
    fn test_password_may_contain_colons() {
        let credentials = parse_authorization(Some(&header_for("alice:a:b:c"))).unwrap();
        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "a:b:c");
    }

    #[test]
    fn test_missing_or_foreign_scheme() {
        assert!(matches!(
            parse_authorization(None),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            parse_authorization(Some("Bearer abc")),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            parse_authorization(Some("basic YWxpY2U6cHcx")),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            parse_authorization(Some("Basic")),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_malformed_payloads() {
        for raw in ["alice", ":pw1", "alice:", ":"] {
            assert!(
                matches!(
                    parse_authorization(Some(&header_for(raw))),
                    Err(AuthError::MalformedCredentials)
                ),
                "expected {raw:?} to be malformed"
            );
        }

        assert!(matches!(
            parse_authorization(Some("Basic !!!not-base64!!!")),
            Err(AuthError::MalformedCredentials)
        ));
        assert!(matches!(
            parse_authorization(Some("Basic ")),
            Err(AuthError::MalformedCredentials)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let header = format!("{}{}", BASIC_SCHEME, STANDARD.encode([0xff, b':', 0xfe]));
        assert!(matches!(
            parse_authorization(Some(&header)),
            Err(AuthError::MalformedCredentials)
        ));
    }
}

//! Configuration management for the Basic Auth server
//!
//! Settings are layered: built-in defaults, an optional `config.toml`,
//! `BASIC_AUTH_*` environment variables, and finally `PORT`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_REALM: &str = "API Authentication";
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// bcrypt accepts cost factors in this range.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Server configuration, loaded once at startup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    // ═══ NETWORK (Environment Override Supported) ═══
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener. `PORT` overrides everything else.
    pub port: u16,

    // ═══ CREDENTIALS ═══
    /// bcrypt cost factor used when hashing new passwords
    pub bcrypt_cost: u32,

    /// Realm advertised in the `WWW-Authenticate` challenge
    pub realm: String,

    /// Emit the challenge header on undecodable credentials too.
    /// Off by default: undecodable credentials get a bare 401.
    pub challenge_on_malformed: bool,

    /// Maximum accepted request body size
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            realm: DEFAULT_REALM.to_string(),
            challenge_on_malformed: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from defaults, `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("bcrypt_cost", i64::from(defaults.bcrypt_cost))?
            .set_default("realm", defaults.realm)?
            .set_default("challenge_on_malformed", defaults.challenge_on_malformed)?
            .set_default("max_body_bytes", defaults.max_body_bytes as i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("BASIC_AUTH"))
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("Port cannot be 0".into()));
        }

        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "bcrypt_cost must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            )));
        }

        if self.realm.trim().is_empty() {
            return Err(ConfigError::Message("realm cannot be empty".into()));
        }

        if self.realm.contains('"') {
            return Err(ConfigError::Message(
                "realm cannot contain double quotes".into(),
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "max_body_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Value of the `WWW-Authenticate` header sent with 401 responses
    pub fn challenge(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm)
    }
}

use std::env;
use std::fmt;

use chrono::Duration;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env::{
        ACCESS_TOKEN_TTL_SECONDS_ENV_VAR, APP_ADDRESS_ENV_VAR, PASETO_KEY_ENV_VAR,
        TOKEN_ISSUER_ENV_VAR,
    },
    DEFAULT_ACCESS_TOKEN_TTL_SECONDS, DEFAULT_APP_ADDRESS, DEFAULT_TOKEN_ISSUER,
};

/// Process-wide settings, loaded once at startup and never reloaded.
#[derive(Clone)]
pub struct Config {
    paseto_key: Vec<u8>,
    access_token_ttl_seconds: i64,
    token_issuer: String,
    app_address: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("paseto_key", &"[redacted]")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("token_issuer", &self.token_issuer)
            .field("app_address", &self.app_address)
            .finish()
    }
}

impl Config {
    pub fn new(
        paseto_key: impl Into<Vec<u8>>,
        access_token_ttl_seconds: i64,
        token_issuer: impl Into<String>,
        app_address: impl Into<String>,
    ) -> Self {
        Self {
            paseto_key: paseto_key.into(),
            access_token_ttl_seconds,
            token_issuer: token_issuer.into(),
            app_address: app_address.into(),
        }
    }

    /// Read the configuration from the environment, loading `.env` first if present.
    ///
    /// The key's length is not checked here; `PasetoMaker::new` is the gate.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let paseto_key = req_var(PASETO_KEY_ENV_VAR)?;
        if paseto_key.is_empty() {
            return Err(ConfigError::Invalid(PASETO_KEY_ENV_VAR));
        }

        let access_token_ttl_seconds = match opt_var(ACCESS_TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(raw) => parse_ttl(ACCESS_TOKEN_TTL_SECONDS_ENV_VAR, &raw)?,
            None => DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
        };

        let token_issuer =
            opt_var(TOKEN_ISSUER_ENV_VAR).unwrap_or_else(|| DEFAULT_TOKEN_ISSUER.into());
        let app_address =
            opt_var(APP_ADDRESS_ENV_VAR).unwrap_or_else(|| DEFAULT_APP_ADDRESS.into());

        Ok(Self::new(
            paseto_key.into_bytes(),
            access_token_ttl_seconds,
            token_issuer,
            app_address,
        ))
    }

    pub fn paseto_key(&self) -> &[u8] {
        &self.paseto_key
    }
    pub fn access_token_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_ttl_seconds)
    }
    pub fn token_issuer(&self) -> &str {
        &self.token_issuer
    }
    pub fn app_address(&self) -> &str {
        &self.app_address
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

// Bounded so that `Duration::seconds` cannot panic.
fn parse_ttl(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(seconds) if seconds > 0 && seconds <= i64::MAX / 1_000 => Ok(seconds),
        _ => Err(ConfigError::Invalid(key)),
    }
}

//! API configuration injected into the marketplace client
//!
//! The token is an explicit value: `from_env` is only a convenience for
//! the binary, library code never reads the environment on its own.

use crate::errors::{ActorError, Result};
use std::time::Duration;

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "APIFY_TOKEN";

/// Default Apify API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.apify.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the marketplace API
#[derive(Clone)]
pub struct ApiConfig {
    token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Create config with the given token and default endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ActorError::MissingConfig(format!(
                "{} is empty",
                TOKEN_ENV_VAR
            )));
        }

        Ok(Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read the token from `APIFY_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(TOKEN_ENV_VAR) {
            Some(token) if !token.trim().is_empty() => Self::new(token),
            _ => Err(ActorError::MissingConfig(format!(
                "{} environment variable is not set",
                TOKEN_ENV_VAR
            ))),
        }
    }

    /// Set API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API token
    pub fn token(&self) -> &str {
        &self.token
    }
}

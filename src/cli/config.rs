//! Configuration file for the actorkit CLI
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.actorkit/config.toml
//!
//! The API token is never read from this file; it comes from `APIFY_TOKEN`.

use crate::actors::search::MAX_SEARCH_LIMIT;
use crate::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{ActorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete configuration for actorkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// Marketplace connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub default_limit: u32,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self { default_limit: 10 }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ActorError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ActorError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".actorkit").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return Err(ActorError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ActorError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.search.default_limit == 0 || self.search.default_limit > MAX_SEARCH_LIMIT {
            return Err(ActorError::Config(format!(
                "default_limit must be between 1 and {}",
                MAX_SEARCH_LIMIT
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ActorError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ActorError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ActorError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Combine file settings with a token into client configuration
    pub fn api_config(&self, token: impl Into<String>) -> Result<ApiConfig> {
        Ok(ApiConfig::new(token)?
            .with_base_url(self.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs)))
    }
}

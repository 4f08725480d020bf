//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the chat gateway, the ranking API and logging.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read and parse the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| crate::strings::logs::config_read_error(&path.display().to_string()))?;
        serde_yaml::from_str(&content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
}

/// Ranking API (RapidAPI) settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub host: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub key_env: Option<String>, // e.g. "RAPIDAPI_KEY"
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Pause before every request, in milliseconds. `0` disables it.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl ApiConfig {
    /// Resolve the API key: inline `key` first, then the variable named by `key_env`.
    pub fn api_key(&self) -> Result<String, crate::domain::error::ApiError> {
        use crate::domain::error::ApiError;

        if let Some(k) = &self.key {
            return Ok(k.clone());
        }
        match &self.key_env {
            Some(env_var) => {
                std::env::var(env_var).map_err(|_| ApiError::MissingKey(env_var.clone()))
            }
            None => Err(ApiError::MissingKey("api.key".to_string())),
        }
    }
}

fn default_endpoint() -> String {
    "list.php".to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: default_log_file(),
        }
    }
}

fn default_log_directory() -> String {
    "data".to_string()
}

fn default_log_file() -> String {
    "session.log".to_string()
}

//! Configuration loader for environment variables and overrides.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and `TEMPLATECTL_*` environment
//!   variables.
//! - Provide a builder-pattern `ConfigLoader` so explicit overrides (CLI
//!   flags) always beat environment values.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration to disk.
//! - Constructing HTTP clients (see the client crate).
//!
//! Invariants / assumptions:
//! - Explicit `with_*` values take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;

use crate::types::{Config, ConnectionConfig};

const ENV_BASE_URL: &str = "TEMPLATECTL_BASE_URL";
const ENV_API_TOKEN: &str = "TEMPLATECTL_API_TOKEN";
const ENV_TIMEOUT_SECS: &str = "TEMPLATECTL_TIMEOUT_SECS";
const ENV_MAX_RETRIES: &str = "TEMPLATECTL_MAX_RETRIES";
const ENV_SKIP_VERIFY: &str = "TEMPLATECTL_SKIP_VERIFY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: usize = 3;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Base URL is required (set TEMPLATECTL_BASE_URL or pass --base-url)")]
    MissingBaseUrl,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Configuration loader that builds config from environment variables and
/// explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory, if present.
    ///
    /// Honors `DOTENV_DISABLED=1` so test runs stay hermetic.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        if std::env::var("DOTENV_DISABLED").as_deref() == Ok("1") {
            return Ok(());
        }
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_api_token(mut self, api_token: SecretString) -> Self {
        self.api_token = Some(api_token);
        self
    }

    pub fn with_skip_verify(mut self, skip_verify: bool) -> Self {
        self.skip_verify = Some(skip_verify);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Fill unset values from `TEMPLATECTL_*` environment variables.
    ///
    /// Values already set through `with_*` keep precedence.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.base_url.is_none()
            && let Ok(value) = std::env::var(ENV_BASE_URL)
        {
            self.base_url = Some(value);
        }
        if self.api_token.is_none()
            && let Ok(value) = std::env::var(ENV_API_TOKEN)
        {
            self.api_token = Some(value.into());
        }
        if self.timeout.is_none()
            && let Ok(value) = std::env::var(ENV_TIMEOUT_SECS)
        {
            let secs = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS.to_string(),
                message: e.to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if self.max_retries.is_none()
            && let Ok(value) = std::env::var(ENV_MAX_RETRIES)
        {
            let retries = value.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                var: ENV_MAX_RETRIES.to_string(),
                message: e.to_string(),
            })?;
            self.max_retries = Some(retries);
        }
        if self.skip_verify.is_none()
            && let Ok(value) = std::env::var(ENV_SKIP_VERIFY)
        {
            let skip = match value.as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_SKIP_VERIFY.to_string(),
                        message: format!("expected a boolean, got {other:?}"),
                    });
                }
            };
            self.skip_verify = Some(skip);
        }
        Ok(self)
    }

    /// Validate and build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
                max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            },
            api_token: self.api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let result = temp_env::with_vars_unset([ENV_BASE_URL], || ConfigLoader::new().build());
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        let result = ConfigLoader::new()
            .with_base_url("not a url".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConfigLoader::new()
            .with_base_url("http://localhost:9200".to_string())
            .build()
            .unwrap();
        assert_eq!(config.connection.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
        assert!(!config.connection.skip_verify);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_env_values_fill_unset_fields() {
        let config = temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://cluster:9200")),
                (ENV_TIMEOUT_SECS, Some("5")),
                (ENV_MAX_RETRIES, Some("1")),
                (ENV_SKIP_VERIFY, Some("true")),
            ],
            || ConfigLoader::new().from_env().unwrap().build().unwrap(),
        );
        assert_eq!(config.connection.base_url, "http://cluster:9200");
        assert_eq!(config.connection.timeout, Duration::from_secs(5));
        assert_eq!(config.connection.max_retries, 1);
        assert!(config.connection.skip_verify);
    }

    #[test]
    fn test_explicit_values_beat_env() {
        let config = temp_env::with_vars(
            [(ENV_BASE_URL, Some("http://from-env:9200"))],
            || {
                ConfigLoader::new()
                    .with_base_url("http://explicit:9200".to_string())
                    .from_env()
                    .unwrap()
                    .build()
                    .unwrap()
            },
        );
        assert_eq!(config.connection.base_url, "http://explicit:9200");
    }

    #[test]
    fn test_invalid_env_numbers_are_rejected() {
        let result = temp_env::with_vars(
            [
                (ENV_BASE_URL, Some("http://cluster:9200")),
                (ENV_TIMEOUT_SECS, Some("soon")),
            ],
            || ConfigLoader::new().from_env(),
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue { var, .. }) if var == ENV_TIMEOUT_SECS));
    }
}

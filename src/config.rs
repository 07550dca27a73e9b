//! Configuration management for api-form
//!
//! Built-in defaults are layered under an optional `config.toml` and
//! `API_FORM_*` environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Endpoint the form submits to when nothing overrides it.
pub const DEFAULT_ENDPOINT_URL: &str = "https://bajaj-qualifier1-backend.onrender.com/bfhl";

/// Upper bound on a single request; a hung connection becomes a transport failure.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_MAX_INPUT_LENGTH: usize = 4096;

const ENV_PREFIX: &str = "API_FORM";

/// Complete client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormConfig {
    // ═══ REMOTE API (Environment Override Supported) ═══
    /// URL the token list is POSTed to
    /// Environment: API_FORM_ENDPOINT_URL
    pub endpoint_url: String,

    /// Request timeout in seconds
    /// Environment: API_FORM_REQUEST_TIMEOUT_SECS
    pub request_timeout_secs: u64,

    // ═══ INPUT LIMITS ═══
    /// Longest terminal line accepted by the session loop
    pub max_input_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl FormConfig {
    /// Load configuration from `config.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (extension is inferred)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("endpoint_url", DEFAULT_ENDPOINT_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("max_input_length", DEFAULT_MAX_INPUT_LENGTH as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.endpoint_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "endpoint_url cannot be empty".into(),
            ));
        }

        match reqwest::Url::parse(&self.endpoint_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(config::ConfigError::Message(format!(
                    "endpoint_url must use http or https, got {}",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(config::ConfigError::Message(format!(
                    "endpoint_url is not a valid URL: {e}"
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.max_input_length == 0 {
            return Err(config::ConfigError::Message(
                "max_input_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = FormConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = FormConfig::load_from("does-not-exist/api-form").unwrap();
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.max_input_length, DEFAULT_MAX_INPUT_LENGTH);
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = FormConfig {
            request_timeout_secs: 0,
            ..FormConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = FormConfig {
            endpoint_url: "ftp://127.0.0.1/bfhl".into(),
            ..FormConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FormConfig {
            endpoint_url: "not a url".into(),
            ..FormConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

//! API configuration
//!
//! The job API base URL comes from the `API_URL` environment variable. It is
//! validated once at server startup and held in a `OnceLock`; the client is
//! always constructed from an explicit `ApiConfig` rather than reading the
//! environment at call time.

use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Environment variable naming the job API base URL.
pub const API_URL_VAR: &str = "API_URL";

/// Error type for configuration loading
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{API_URL_VAR} is not set; point it at the job API base URL")]
    MissingBaseUrl,

    #[error("{API_URL_VAR} is empty")]
    EmptyBaseUrl,

    #[error("API configuration was not initialized at startup")]
    NotInitialized,
}

/// Validated job API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from an explicit base URL value, as read from the environment.
    pub fn from_base_url(value: Option<String>) -> Result<Self, ConfigError> {
        let raw = value.ok_or(ConfigError::MissingBaseUrl)?;
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read and validate `API_URL` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(std::env::var(API_URL_VAR).ok())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The jobs collection endpoint (`GET`/`POST`).
    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }
}

/// Validate the environment and store the config for the process lifetime.
/// Call this at startup.
pub fn init_from_env() -> Result<(), ConfigError> {
    let config = ApiConfig::from_env()?;
    API_CONFIG.set(config).ok();
    Ok(())
}

/// Get the configured API settings.
pub fn current() -> Result<&'static ApiConfig, ConfigError> {
    API_CONFIG.get().ok_or(ConfigError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_is_a_missing_url() {
        assert_eq!(
            ApiConfig::from_base_url(None),
            Err(ConfigError::MissingBaseUrl)
        );
    }

    #[test]
    fn test_blank_value_is_rejected() {
        assert_eq!(
            ApiConfig::from_base_url(Some("   ".to_string())),
            Err(ConfigError::EmptyBaseUrl)
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::from_base_url(Some("http://localhost:8080/".to_string())).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.jobs_url(), "http://localhost:8080/jobs");
    }

    #[test]
    fn test_valid_url_passes_through() {
        let config = ApiConfig::from_base_url(Some("https://api.example.com".to_string())).unwrap();
        assert_eq!(config.jobs_url(), "https://api.example.com/jobs");
    }
}

//! Catalog configuration.
//!
//! The single API credential is read once at startup and injected into the
//! provider; it is never consulted per request or held in a global.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Configuration for the YouTube catalog provider.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API key sent with every catalog request
    pub api_key: String,
    /// Base URL of the catalog API
    pub api_base: String,
    /// HTTP request timeout for catalog calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl CatalogConfig {
    /// Creates a configuration with the given API key and default transport
    /// settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: "https://www.googleapis.com/youtube/v3".to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: "vidlist/0.1.0",
        }
    }

    /// Reads the API key from the environment.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` - `YOUTUBE_API_KEY` is unset or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

/// Startup-time configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog credential was not supplied at process start.
    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_youtube_v3_base() {
        let config = CatalogConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_base, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}

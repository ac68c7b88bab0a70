//! Client configuration.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "https://localhost:7147";

/// Configuration for the taskdeck API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Static username for `POST /api/Token/Authentication`.
    pub user: String,

    /// Static password for `POST /api/Token/Authentication`.
    pub password: String,

    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// How long an acquired bearer token is reused before re-authenticating.
    /// An approximation, not tied to the token's own expiry claim.
    #[serde(default = "default_token_ttl")]
    pub token_ttl: Duration,
}

impl ApiConfig {
    /// Create a new configuration. Any trailing slash on the base URL is
    /// stripped so paths can be appended verbatim.
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.into(),
            password: password.into(),
            timeout: default_timeout(),
            token_ttl: default_token_ttl(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `TASKDECK_API_URL` falls back to [`DEFAULT_BASE_URL`];
    /// `TASKDECK_API_USER` and `TASKDECK_API_PASSWORD` are required.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TASKDECK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user = std::env::var("TASKDECK_API_USER")
            .map_err(|_| ApiError::Config("Environment variable: TASKDECK_API_USER".to_string()))?;
        let password = std::env::var("TASKDECK_API_PASSWORD").map_err(|_| {
            ApiError::Config("Environment variable: TASKDECK_API_PASSWORD".to_string())
        })?;

        Ok(Self::new(base_url, user, password))
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the token reuse window.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_token_ttl() -> Duration {
    Duration::from_secs(60 * 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("https://panel.example.com/", "admin", "secret");
        assert_eq!(config.base_url, "https://panel.example.com");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, "admin", "secret");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, "admin", "secret")
            .with_timeout(Duration::from_secs(5))
            .with_token_ttl(Duration::from_secs(60));

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token_ttl, Duration::from_secs(60));
    }
}

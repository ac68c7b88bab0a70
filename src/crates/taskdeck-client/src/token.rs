//! Bearer-token acquisition and caching.
//!
//! The provider owns a scoped credential cache shared by reference with the
//! resource clients. A cached token is reused until its age exceeds the
//! configured TTL; acquisition failures are logged and yield `None`, letting
//! the next request go out tokenless for the backend to reject.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time source for token expiry, injectable for deterministic tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Credential acquisition seam, implemented over HTTP in production.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self) -> Result<String>;
}

/// Authenticates against `POST /api/Token/Authentication` with the statically
/// configured username/password pair.
pub struct HttpAuthenticator {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpAuthenticator {
    pub fn new(config: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self) -> Result<String> {
        let url = format!("{}/api/Token/Authentication", self.config.base_url);

        let body = CredentialsBody {
            user: &self.config.user,
            password: &self.config.password,
        };

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Auth(format!("{}: {}", status, text)));
        }

        let token: TokenBody = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(token.token)
    }
}

struct CachedToken {
    value: String,
    acquired_at: Instant,
}

/// Caching bearer-credential provider.
pub struct TokenProvider {
    auth: Arc<dyn Authenticator>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    /// Create a provider over the given authenticator, reusing tokens for
    /// `ttl` before re-authenticating.
    pub fn new(auth: Arc<dyn Authenticator>, ttl: Duration) -> Self {
        Self::with_clock(auth, ttl, Arc::new(SystemClock))
    }

    /// Create a provider with an explicit time source.
    pub fn with_clock(auth: Arc<dyn Authenticator>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            auth,
            clock,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Return a bearer credential, reusing the cached one while it is fresh.
    ///
    /// Returns `None` when acquisition fails; callers proceed without an
    /// `Authorization` header rather than short-circuiting. Two concurrent
    /// calls on a cold cache may both authenticate; both tokens are valid and
    /// the lock is never held across an await.
    pub async fn bearer(&self) -> Option<String> {
        if let Some(token) = self.fresh_token() {
            return Some(token);
        }

        match self.auth.authenticate().await {
            Ok(token) => {
                if !token.is_empty() {
                    *self.cached.lock() = Some(CachedToken {
                        value: token.clone(),
                        acquired_at: self.clock.now(),
                    });
                }
                Some(token)
            }
            Err(err) => {
                tracing::error!("token acquisition failed: {err}");
                None
            }
        }
    }

    /// Drop the cached credential, forcing the next call to re-authenticate.
    pub fn invalidate(&self) {
        *self.cached.lock() = None;
    }

    fn fresh_token(&self) -> Option<String> {
        let guard = self.cached.lock();
        let cached = guard.as_ref()?;
        let age = self.clock.now().saturating_duration_since(cached.acquired_at);
        if !cached.value.is_empty() && age < self.ttl {
            Some(cached.value.clone())
        } else {
            None
        }
    }
}

#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    #[serde(rename = "User")]
    user: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(alias = "Token")]
    token: String,
}

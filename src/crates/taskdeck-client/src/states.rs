//! State resource client.
//!
//! Wraps `GET /api/State/GetStates`, `GET /api/State/GetState/{id}`,
//! `POST /api/State/PostState`, `PUT /api/State/UpdateState/{id}` and
//! `DELETE /api/State/DeleteState/{id}`.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::outcome::{check_status, unwrap_operation};
use crate::token::TokenProvider;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::sync::Arc;
use taskdeck_core::{NewState, OperationOutcome, TaskState};

/// Operations on the state resource, as the store consumes them.
#[async_trait]
pub trait StateGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<TaskState>>;
    async fn get(&self, id: i64) -> Result<TaskState>;
    async fn create(&self, draft: &NewState) -> OperationOutcome;
    async fn update(&self, id: i64, draft: &NewState) -> OperationOutcome;
    async fn delete(&self, id: i64) -> OperationOutcome;
}

/// HTTP client for the state resource.
#[derive(Clone)]
pub struct StateApi {
    config: ApiConfig,
    http: Client,
    tokens: Arc<TokenProvider>,
}

impl StateApi {
    /// Create a new state client sharing the given token provider.
    pub fn new(config: ApiConfig, tokens: Arc<TokenProvider>) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            tokens,
        }
    }

    async fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json; charset=utf-8");

        if let Some(token) = self.tokens.bearer().await {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }
}

#[async_trait]
impl StateGateway for StateApi {
    async fn list(&self) -> Result<Vec<TaskState>> {
        let url = format!("{}/api/State/GetStates", self.config.base_url);
        let response = self.request(Method::GET, url).await.send().await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<TaskState> {
        let url = format!("{}/api/State/GetState/{id}", self.config.base_url);
        let response = self.request(Method::GET, url).await.send().await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn create(&self, draft: &NewState) -> OperationOutcome {
        let url = format!("{}/api/State/PostState", self.config.base_url);
        let sent = self
            .request(Method::POST, url)
            .await
            .json(draft)
            .send()
            .await;
        unwrap_operation(sent).await
    }

    async fn update(&self, id: i64, draft: &NewState) -> OperationOutcome {
        let url = format!("{}/api/State/UpdateState/{id}", self.config.base_url);
        let sent = self
            .request(Method::PUT, url)
            .await
            .json(draft)
            .send()
            .await;
        unwrap_operation(sent).await
    }

    async fn delete(&self, id: i64) -> OperationOutcome {
        let url = format!("{}/api/State/DeleteState/{id}", self.config.base_url);
        let sent = self.request(Method::DELETE, url).await.send().await;
        unwrap_operation(sent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::HttpAuthenticator;

    #[test]
    fn test_client_creation() {
        let config = ApiConfig::new("https://localhost:7147", "admin", "secret");
        let tokens = Arc::new(TokenProvider::new(
            Arc::new(HttpAuthenticator::new(config.clone())),
            config.token_ttl,
        ));
        let _client = StateApi::new(config, tokens);
    }

    #[test]
    fn test_create_body_shape() {
        let draft = NewState {
            name: "En curso".to_string(),
            is_active: true,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "En curso", "isActive": true})
        );
    }

    #[tokio::test]
    #[ignore] // Requires a running backend and TASKDECK_API_* credentials
    async fn test_list_against_live_backend() {
        let config = ApiConfig::from_env().unwrap();
        let tokens = Arc::new(TokenProvider::new(
            Arc::new(HttpAuthenticator::new(config.clone())),
            config.token_ttl,
        ));
        let api = StateApi::new(config, tokens);

        let states = api.list().await.unwrap();
        assert!(states.iter().all(|s| !s.name.is_empty()));
    }
}

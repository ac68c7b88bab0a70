//! Task resource client.
//!
//! Wraps `GET /api/Task`, `GET /api/Task/{id}`, `POST /api/Task/PostTask`,
//! `PUT /api/Task/UpdateTask`, `DELETE /api/Task/DeleteTask/{id}` and
//! `GET /api/Task/states`.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::outcome::{check_status, unwrap_operation};
use crate::token::TokenProvider;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use taskdeck_core::{NewTask, OperationOutcome, QueryFilter, Task, TaskPage, TaskState, TaskUpdate};

/// Operations on the task resource, as the store consumes them.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    async fn list(&self, filter: &QueryFilter) -> Result<TaskPage>;
    async fn get(&self, id: i64) -> Result<Task>;
    async fn create(&self, draft: &NewTask) -> OperationOutcome;
    async fn update(&self, update: &TaskUpdate) -> OperationOutcome;
    async fn delete(&self, id: i64) -> OperationOutcome;
    /// States offered for assignment on the task form.
    async fn states(&self) -> Result<Vec<TaskState>>;
}

/// HTTP client for the task resource.
#[derive(Clone)]
pub struct TaskApi {
    config: ApiConfig,
    http: Client,
    tokens: Arc<TokenProvider>,
}

impl TaskApi {
    /// Create a new task client sharing the given token provider.
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

    /// Build a request with the standard headers. A missing token sends the
    /// request without `Authorization` and lets the backend reject it.
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
impl TaskGateway for TaskApi {
    async fn list(&self, filter: &QueryFilter) -> Result<TaskPage> {
        let url = format!("{}/api/Task", self.config.base_url);
        let response = self
            .request(Method::GET, url)
            .await
            .query(filter)
            .send()
            .await?;
        let response = check_status(response).await?;

        let wire: TaskPageWire = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        Ok(wire.into_page(filter))
    }

    async fn get(&self, id: i64) -> Result<Task> {
        let url = format!("{}/api/Task/{id}", self.config.base_url);
        let response = self.request(Method::GET, url).await.send().await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn create(&self, draft: &NewTask) -> OperationOutcome {
        let url = format!("{}/api/Task/PostTask", self.config.base_url);
        let now = stamp_now();
        let body = TaskWriteBody {
            id: None,
            title: &draft.title,
            description: &draft.description,
            due_date: normalize_due_date(&draft.due_date),
            state_id: draft.state_id,
            created_at: now.clone(),
            updated_at: now,
        };

        let sent = self.request(Method::POST, url).await.json(&body).send().await;
        unwrap_operation(sent).await
    }

    async fn update(&self, update: &TaskUpdate) -> OperationOutcome {
        let url = format!("{}/api/Task/UpdateTask", self.config.base_url);
        // The update endpoint expects CreatedAt freshly stamped along with
        // UpdatedAt; the stored creation timestamp is overwritten.
        let now = stamp_now();
        let body = TaskWriteBody {
            id: Some(update.id),
            title: &update.title,
            description: &update.description,
            due_date: normalize_due_date(&update.due_date),
            state_id: update.state_id,
            created_at: now.clone(),
            updated_at: now,
        };

        let sent = self.request(Method::PUT, url).await.json(&body).send().await;
        unwrap_operation(sent).await
    }

    async fn delete(&self, id: i64) -> OperationOutcome {
        let url = format!("{}/api/Task/DeleteTask/{id}", self.config.base_url);
        let sent = self.request(Method::DELETE, url).await.send().await;
        unwrap_operation(sent).await
    }

    async fn states(&self) -> Result<Vec<TaskState>> {
        let url = format!("{}/api/Task/states", self.config.base_url);
        let response = self.request(Method::GET, url).await.send().await?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

/// Current wall clock in the backend's expected stamp format.
fn stamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Expand a bare `YYYY-MM-DD` form value to a full UTC timestamp; anything
/// else is already a timestamp and passes through untouched.
fn normalize_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Utc
            .from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TaskWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    title: &'a str,
    description: &'a str,
    due_date: String,
    state_id: i64,
    created_at: String,
    updated_at: String,
}

#[derive(Debug, Deserialize)]
struct TaskPageWire {
    #[serde(rename = "pagedTasks", alias = "PagedTasks", default)]
    paged_tasks: Vec<Task>,
    #[serde(rename = "totalCount", alias = "TotalCount")]
    total_count: Option<u64>,
    #[serde(rename = "pageNumber", alias = "PageNumber")]
    page_number: Option<u32>,
    #[serde(rename = "pageSize", alias = "PageSize")]
    page_size: Option<u32>,
}

impl TaskPageWire {
    /// Trust the echoed pagination fields, falling back to the page length
    /// and the requested parameters when the backend omits them.
    fn into_page(self, filter: &QueryFilter) -> TaskPage {
        let total_count = self.total_count.unwrap_or(self.paged_tasks.len() as u64);
        TaskPage {
            total_count,
            page_number: self.page_number.or(filter.page_number).unwrap_or(1),
            page_size: self.page_size.or(filter.page_size).unwrap_or(10),
            items: self.paged_tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::SortOrder;

    fn full_filter() -> QueryFilter {
        QueryFilter {
            search: Some("renew".to_string()),
            state_id: Some(2),
            order_by: Some(SortOrder::DueDateAsc),
            page_number: Some(1),
            page_size: Some(10),
        }
    }

    #[test]
    fn test_list_query_string() {
        let client = Client::new();
        let request = client
            .get("https://localhost:7147/api/Task")
            .query(&full_filter())
            .build()
            .unwrap();

        assert_eq!(
            request.url().query(),
            Some("search=renew&stateId=2&orderBy=dueDateAsc&pageNumber=1&pageSize=10")
        );
    }

    #[test]
    fn test_list_query_omits_absent_parameters() {
        let client = Client::new();
        let filter = QueryFilter {
            page_number: Some(3),
            ..QueryFilter::default()
        };
        let request = client
            .get("https://localhost:7147/api/Task")
            .query(&filter)
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("pageNumber=3"));
    }

    #[test]
    fn test_page_trusts_echoed_fields() {
        let wire: TaskPageWire = serde_json::from_str(
            r#"{"pagedTasks": [], "totalCount": 23, "pageNumber": 1, "pageSize": 10}"#,
        )
        .unwrap();
        let page = wire.into_page(&full_filter());

        assert_eq!(page.total_count, 23);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn test_page_falls_back_to_request_parameters() {
        let wire: TaskPageWire = serde_json::from_str(
            r#"{"PagedTasks": [
                {"Id": 1, "Title": "uno", "DueDate": "2026-01-01", "StateId": 1},
                {"Id": 2, "Title": "dos", "DueDate": "2026-01-02", "StateId": 1}
            ]}"#,
        )
        .unwrap();
        let filter = QueryFilter {
            page_number: Some(2),
            page_size: Some(25),
            ..QueryFilter::default()
        };
        let page = wire.into_page(&filter);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 25);
    }

    #[test]
    fn test_page_defaults_without_request_parameters() {
        let wire: TaskPageWire = serde_json::from_str(r#"{}"#).unwrap();
        let page = wire.into_page(&QueryFilter::default());

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn test_write_body_is_pascal_case() {
        let body = TaskWriteBody {
            id: Some(5),
            title: "Renovar",
            description: "certificado",
            due_date: "2026-09-01T00:00:00.000Z".to_string(),
            state_id: 2,
            created_at: "2026-08-05T12:00:00.000Z".to_string(),
            updated_at: "2026-08-05T12:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["Id"], 5);
        assert_eq!(json["Title"], "Renovar");
        assert_eq!(json["Description"], "certificado");
        assert_eq!(json["DueDate"], "2026-09-01T00:00:00.000Z");
        assert_eq!(json["StateId"], 2);
        assert_eq!(json["CreatedAt"], "2026-08-05T12:00:00.000Z");
        assert_eq!(json["UpdatedAt"], "2026-08-05T12:00:00.000Z");
    }

    #[test]
    fn test_create_body_omits_id() {
        let body = TaskWriteBody {
            id: None,
            title: "t",
            description: "d",
            due_date: "2026-09-01".to_string(),
            state_id: 1,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("Id").is_none());
    }

    #[test]
    fn test_normalize_due_date_expands_bare_dates() {
        assert_eq!(
            normalize_due_date("2026-09-01"),
            "2026-09-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_normalize_due_date_passes_timestamps_through() {
        assert_eq!(
            normalize_due_date("2026-09-01T15:30:00.000Z"),
            "2026-09-01T15:30:00.000Z"
        );
    }

    #[test]
    fn test_stamp_format() {
        let stamp = stamp_now();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-08-05T12:00:00.000Z".len());
    }

    #[tokio::test]
    #[ignore] // Requires a running backend and TASKDECK_API_* credentials
    async fn test_list_against_live_backend() {
        let config = ApiConfig::from_env().unwrap();
        let tokens = Arc::new(TokenProvider::new(
            Arc::new(crate::token::HttpAuthenticator::new(config.clone())),
            config.token_ttl,
        ));
        let api = TaskApi::new(config, tokens);

        let page = api.list(&QueryFilter::default()).await.unwrap();
        assert!(page.total_count >= page.items.len() as u64);
    }
}

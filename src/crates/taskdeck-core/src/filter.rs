//! List query parameters for the task resource.

use serde::{Deserialize, Serialize};

/// Sort order over the task due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    DueDateAsc,
    DueDateDesc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::DueDateAsc
    }
}

/// Transient, client-only query parameters for the task list.
///
/// Serializes to the backend's query-string names; `None` fields are omitted
/// from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    /// Free-text search over title and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,

    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

//! Task entity and its write drafts.

use serde::{Deserialize, Serialize};

/// A unit of work with a title, description, due date and lifecycle state.
///
/// Deserialization accepts both casing conventions the backend is known to
/// emit (`dueDate` and `DueDate`). Fields the client does not model are kept
/// verbatim in [`extra`](Task::extra) rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "Id")]
    pub id: i64,

    #[serde(alias = "Title")]
    pub title: String,

    #[serde(alias = "Description", default)]
    pub description: String,

    /// ISO-8601 due date, passed through exactly as the backend sent it.
    #[serde(alias = "DueDate")]
    pub due_date: String,

    /// Server-assigned creation timestamp (ISO-8601).
    #[serde(alias = "CreatedAt", default)]
    pub created_at: String,

    /// Server-assigned last-update timestamp (ISO-8601).
    #[serde(alias = "UpdatedAt", default)]
    pub updated_at: String,

    #[serde(alias = "StateId")]
    pub state_id: i64,

    /// Denormalized state name for display, when the backend includes it.
    #[serde(alias = "StateName", default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,

    /// Backend fields not modeled by the client, preserved unfiltered.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Draft for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// ISO-8601 due date.
    pub due_date: String,
    pub state_id: i64,
}

/// Draft for updating an existing task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// ISO-8601 due date.
    pub due_date: String,
    pub state_id: i64,
}

impl TaskUpdate {
    /// Build an update draft from an id and a create draft.
    pub fn from_draft(id: i64, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            state_id: draft.state_id,
        }
    }
}

/// One server-paginated page of tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPage {
    pub items: Vec<Task>,
    pub total_count: u64,
    /// 1-based page number echoed by the server.
    pub page_number: u32,
    pub page_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Renovar certificado",
                "description": "TLS del panel",
                "dueDate": "2026-09-01T00:00:00",
                "createdAt": "2026-08-01T10:00:00",
                "updatedAt": "2026-08-02T10:00:00",
                "stateId": 2,
                "stateName": "Pendiente"
            }"#,
        )
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Renovar certificado");
        assert_eq!(task.due_date, "2026-09-01T00:00:00");
        assert_eq!(task.state_id, 2);
        assert_eq!(task.state_name.as_deref(), Some("Pendiente"));
        assert!(task.extra.is_empty());
    }

    #[test]
    fn test_deserialize_pascal_case_matches_camel() {
        let camel: Task = serde_json::from_str(
            r#"{"id":1,"title":"t","description":"d","dueDate":"2026-01-01T00:00:00",
                "createdAt":"c","updatedAt":"u","stateId":3,"stateName":"Hecho"}"#,
        )
        .unwrap();
        let pascal: Task = serde_json::from_str(
            r#"{"Id":1,"Title":"t","Description":"d","DueDate":"2026-01-01T00:00:00",
                "CreatedAt":"c","UpdatedAt":"u","StateId":3,"StateName":"Hecho"}"#,
        )
        .unwrap();

        assert_eq!(camel, pascal);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"title":"t","dueDate":"2026-01-01","stateId":1,"Priority":"high"}"#,
        )
        .unwrap();

        assert_eq!(
            task.extra.get("Priority"),
            Some(&serde_json::Value::String("high".to_string()))
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"t","dueDate":"2026-01-01","stateId":1}"#)
                .unwrap();

        assert_eq!(task.description, "");
        assert_eq!(task.created_at, "");
        assert!(task.state_name.is_none());
    }

    #[test]
    fn test_update_from_draft() {
        let draft = NewTask {
            title: "t".to_string(),
            description: "d".to_string(),
            due_date: "2026-01-01".to_string(),
            state_id: 4,
        };
        let update = TaskUpdate::from_draft(9, draft.clone());

        assert_eq!(update.id, 9);
        assert_eq!(update.title, draft.title);
        assert_eq!(update.state_id, 4);
    }
}

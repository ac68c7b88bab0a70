//! Lifecycle state entity and its write draft.

use serde::{Deserialize, Serialize};

/// A named lifecycle label assignable to tasks (e.g. "Pendiente", "Hecho").
///
/// Accepts both backend casing conventions; unmodeled fields are preserved in
/// [`extra`](TaskState::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    #[serde(alias = "Id")]
    pub id: i64,

    #[serde(alias = "Name")]
    pub name: String,

    /// Whether the state is selectable for new tasks. Absent means active.
    #[serde(alias = "IsActive", default = "default_active")]
    pub is_active: bool,

    /// Backend fields not modeled by the client, preserved unfiltered.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Draft for creating or updating a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewState {
    pub name: String,
    pub is_active: bool,
}

impl Default for NewState {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
        }
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_casings_match() {
        let camel: TaskState =
            serde_json::from_str(r#"{"id":1,"name":"Pendiente","isActive":false}"#).unwrap();
        let pascal: TaskState =
            serde_json::from_str(r#"{"Id":1,"Name":"Pendiente","IsActive":false}"#).unwrap();

        assert_eq!(camel, pascal);
        assert!(!camel.is_active);
    }

    #[test]
    fn test_active_defaults_true() {
        let state: TaskState = serde_json::from_str(r#"{"id":2,"name":"Hecho"}"#).unwrap();
        assert!(state.is_active);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let state: TaskState =
            serde_json::from_str(r##"{"id":2,"name":"Hecho","Color":"#00ff00"}"##).unwrap();
        assert_eq!(
            state.extra.get("Color"),
            Some(&serde_json::Value::String("#00ff00".to_string()))
        );
    }

    #[test]
    fn test_new_state_serializes_camel_case() {
        let draft = NewState {
            name: "En revisión".to_string(),
            is_active: true,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "En revisión");
        assert_eq!(json["isActive"], true);
    }
}

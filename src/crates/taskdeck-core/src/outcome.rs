//! Canonical outcome of a write operation.

use serde::{Deserialize, Serialize};

/// The success/result/message triple every write operation resolves to.
///
/// The backend signals failure through either of two independent flags, so
/// both must be true for the operation to count as successful. Absent flags
/// default to `true`: only an explicit `false` (or a failed request, which
/// callers fold in via [`OperationOutcome::failure`]) flips the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// Whether the backend accepted the operation.
    #[serde(
        rename = "stateOperation",
        alias = "StateOperation",
        default = "default_flag"
    )]
    pub ok: bool,

    #[serde(rename = "result", alias = "Result", default = "default_flag")]
    pub result: bool,

    #[serde(rename = "message", alias = "Message", default = "default_message")]
    pub message: String,
}

impl OperationOutcome {
    /// Outcome for a request that never produced a usable response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: false,
            message: message.into(),
        }
    }

    /// Both flags must be true; message content is irrelevant.
    pub fn is_success(&self) -> bool {
        self.ok && self.result
    }
}

impl Default for OperationOutcome {
    fn default() -> Self {
        Self {
            ok: true,
            result: true,
            message: default_message(),
        }
    }
}

fn default_flag() -> bool {
    true
}

fn default_message() -> String {
    "Operación exitosa".to_string()
}

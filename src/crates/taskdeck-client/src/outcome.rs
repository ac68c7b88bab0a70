//! Folding HTTP responses into canonical shapes.
//!
//! Write operations never surface transport errors directly: whatever
//! happens on the wire is folded into an `OperationOutcome`. Reads go through
//! [`check_status`], which extracts the backend's message field when a
//! request fails.

use crate::error::{ApiError, Result};
use taskdeck_core::OperationOutcome;

/// Fold the result of a sent write request into an outcome.
///
/// - Transport error: failure outcome carrying the transport error's message.
/// - Non-2xx: failure outcome with the backend's `message`/`Message` field,
///   or the literal `"Error"` when the body has none.
/// - 2xx: the parsed outcome; an empty or unrecognizable body counts as
///   success with the default message.
pub(crate) async fn unwrap_operation(
    sent: std::result::Result<reqwest::Response, reqwest::Error>,
) -> OperationOutcome {
    let response = match sent {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("write request failed: {err}");
            return OperationOutcome::failure(err.to_string());
        }
    };

    if !response.status().is_success() {
        let status = response.status();
        tracing::warn!("write rejected with status {status}");
        let body = response.json::<serde_json::Value>().await.ok();
        return OperationOutcome::failure(failure_message(body.as_ref()));
    }

    let body = response.bytes().await.ok();
    parse_outcome(body.as_deref().unwrap_or_default())
}

/// Message for a failed write, in lookup order: backend message field, then
/// the fallback literal.
pub(crate) fn failure_message(body: Option<&serde_json::Value>) -> String {
    body.and_then(extract_message)
        .unwrap_or_else(|| "Error".to_string())
}

/// Parse a 2xx write body. Absent flags default to true; an unparseable body
/// is treated the same as an empty one.
pub(crate) fn parse_outcome(body: &[u8]) -> OperationOutcome {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Pass 2xx responses through; turn anything else into an [`ApiError`] with
/// the backend's message when one is present.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<serde_json::Value>().await.ok();
    let message = body
        .as_ref()
        .and_then(extract_message)
        .unwrap_or_else(|| status.to_string());

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Auth(message));
    }

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn extract_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("Message"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_outcome_empty_body_succeeds() {
        let outcome = parse_outcome(b"");
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Operación exitosa");
    }

    #[test]
    fn test_parse_outcome_explicit_false_flag() {
        let outcome = parse_outcome(br#"{"StateOperation": false, "Message": "Duplicate name"}"#);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Duplicate name");
    }

    #[test]
    fn test_parse_outcome_camel_case() {
        let outcome = parse_outcome(br#"{"stateOperation": true, "result": false}"#);
        assert!(outcome.ok);
        assert!(!outcome.result);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_failure_message_prefers_backend_field() {
        let body = json!({"Message": "No se pudo eliminar"});
        assert_eq!(failure_message(Some(&body)), "No se pudo eliminar");

        let body = json!({"message": "ocupado"});
        assert_eq!(failure_message(Some(&body)), "ocupado");
    }

    #[test]
    fn test_failure_message_falls_back_to_literal() {
        assert_eq!(failure_message(None), "Error");
        let body = json!({"detail": "sin mensaje"});
        assert_eq!(failure_message(Some(&body)), "Error");
    }
}

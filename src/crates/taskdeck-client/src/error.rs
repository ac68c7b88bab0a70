//! Error types for the API client.

use thiserror::Error;

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by read operations and configuration.
///
/// Write operations do not use this type: their failures are folded into an
/// [`OperationOutcome`](taskdeck_core::OperationOutcome).
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credentials or the bearer token.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The backend answered with a non-success status.
    #[error("Backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Check if this error is due to authentication.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::Auth(_) | ApiError::Status { status: 401, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_detection() {
        assert!(ApiError::Auth("bad password".to_string()).is_auth_error());
        assert!(ApiError::Status {
            status: 401,
            message: "Unauthorized".to_string()
        }
        .is_auth_error());
        assert!(!ApiError::Status {
            status: 500,
            message: "boom".to_string()
        }
        .is_auth_error());
    }

    #[test]
    fn test_display_carries_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Duplicate name".to_string(),
        };
        assert_eq!(err.to_string(), "Backend error 409: Duplicate name");
    }
}

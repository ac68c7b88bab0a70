//! Error type for store operations.

use taskdeck_client::ApiError;
use thiserror::Error;

/// Failure of a store operation, already reflected in the state's `error`
/// field by the time callers see it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend answered a write with a failed outcome; carries the
    /// outcome's message.
    #[error("{0}")]
    Rejected(String),

    /// A read failed at the API client.
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_backend_message() {
        let err = StoreError::Rejected("Duplicate name".to_string());
        assert_eq!(err.to_string(), "Duplicate name");
    }
}

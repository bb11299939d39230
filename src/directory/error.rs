//! Fetch error types
//!
//! Every failure of a fetch cycle ends up here. Callers only ever show
//! [`FetchError::user_message`]; the variants exist for logging.

use thiserror::Error;

use crate::labels;

/// Errors that can occur during a fetch cycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body is not a JSON array of records
    #[error("Invalid payload: {0}")]
    Validation(String),

    /// HTTP client or view could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    TransportOrStatus,
    Validation,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Validation(_) => FetchErrorKind::Validation,
            FetchError::Transport(_) | FetchError::Status { .. } | FetchError::Client(_) => {
                FetchErrorKind::TransportOrStatus
            }
        }
    }

    /// The message stored in view state. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        labels::FETCH_FAILED
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected status 503: down");

        let err = FetchError::Validation("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid payload: expected an array");
    }

    #[test]
    fn test_kinds_share_one_user_message() {
        let transport = FetchError::Transport("refused".to_string());
        let validation = FetchError::Validation("object".to_string());

        assert_eq!(transport.kind(), FetchErrorKind::TransportOrStatus);
        assert_eq!(validation.kind(), FetchErrorKind::Validation);
        assert_eq!(transport.user_message(), validation.user_message());
        assert_eq!(transport.user_message(), "Error en la solicitud");
    }
}

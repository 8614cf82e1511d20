//! Backend error types

use super::routes::RouteError;
use std::collections::BTreeMap;

/// Errors from backend calls
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend rejected one or more fields (HTTP 422)
    #[error("validation failed for {} field(s)", .errors.len())]
    Validation {
        errors: BTreeMap<String, Vec<String>>,
        /// Summary line sent next to the field errors
        message: Option<String>,
    },
    /// Non-2xx answer other than a validation failure
    #[error("backend returned {status}")]
    Server { status: u16, message: Option<String> },
    /// HTTP transport error
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Response body could not be decoded
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("configuration error: {0}")]
    Config(String),
    /// The request task ended without an answer
    #[error("request was interrupted")]
    Interrupted,
}

impl BackendError {
    /// Message the backend wants shown, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_present() {
        let err = BackendError::Server {
            status: 409,
            message: Some("Order already paid".to_string()),
        };
        assert_eq!(err.server_message(), Some("Order already paid"));
        assert_eq!(err.to_string(), "backend returned 409");
    }

    #[test]
    fn test_server_message_blank_is_none() {
        let err = BackendError::Server {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_validation_display_counts_fields() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), vec!["taken".to_string()]);
        let err = BackendError::Validation {
            errors,
            message: None,
        };
        assert_eq!(err.to_string(), "validation failed for 1 field(s)");
    }
}

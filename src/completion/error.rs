//! Completion service error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking the completion service for a reply
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Rate limited{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(", retry after {}s", d.as_secs()),
        None => String::new(),
    }
}

impl CompletionError {
    /// Classify a non-success HTTP status into the matching variant
    pub fn from_status(status: u16, message: String, retry_after: Option<Duration>) -> Self {
        match status {
            401 | 403 => CompletionError::Authentication { status, message },
            429 => CompletionError::RateLimited { retry_after },
            _ => CompletionError::Api { status, message },
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        matches!(self, CompletionError::RateLimited { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, CompletionError::Authentication { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies() {
        assert!(CompletionError::from_status(401, "bad key".to_string(), None).is_auth());
        assert!(CompletionError::from_status(403, "forbidden".to_string(), None).is_auth());
        assert!(CompletionError::from_status(429, String::new(), None).is_rate_limit());
        assert!(matches!(
            CompletionError::from_status(500, "boom".to_string(), None),
            CompletionError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_rate_limit_message() {
        let err = CompletionError::RateLimited {
            retry_after: Some(Duration::from_secs(20)),
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 20s");

        let err = CompletionError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "Rate limited");
    }

    #[test]
    fn test_api_error_message_carries_cause() {
        let err = CompletionError::Api {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad gateway");
    }
}

use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// Failures raised while retrieving or decoding the configuration document.
///
/// None of these escape the loading path. The service logs the failure and
/// substitutes the fallback record, so the variants exist to make the log
/// line say whether the origin was unreachable or answered badly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration endpoint returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Configuration document malformed: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Configuration source unavailable: {0}")]
    Unavailable(String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::NOT_FOUND
        };
        assert_eq!(
            err.to_string(),
            "Configuration endpoint returned 404 Not Found"
        );
    }

    #[test]
    fn test_payload_error_display() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::Payload(inner);
        assert!(err.to_string().starts_with("Configuration document malformed"));
    }

    #[test]
    fn test_unavailable_error_display() {
        let err = FetchError::Unavailable("no document configured".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration source unavailable: no document configured"
        );
    }
}

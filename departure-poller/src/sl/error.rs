//! SL Transport client error types.

use std::time::Duration;

/// Status code reported for failures that never produced an HTTP status
/// (network errors, timeouts, undecodable bodies).
pub const TRANSPORT_ERROR_STATUS: u16 = 600;

/// Errors from fetching a station's departures.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, client timeout, bad proxy, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The fetch did not settle within the configured timeout
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl FetchError {
    /// Status code reported to the display front end.
    ///
    /// The provider's HTTP status for rejected requests, otherwise
    /// [`TRANSPORT_ERROR_STATUS`].
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::Status { status, .. } => *status,
            _ => TRANSPORT_ERROR_STATUS,
        }
    }

    /// Human-readable message reported to the display front end.
    pub fn message(&self) -> String {
        match self {
            FetchError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = FetchError::Json {
            message: "missing field `departures`".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: missing field `departures`"
        );

        let err = FetchError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "fetch timed out after 30s");
    }

    #[test]
    fn status_codes() {
        let err = FetchError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Not Found");

        let err = FetchError::Timeout(Duration::from_millis(10));
        assert_eq!(err.status_code(), TRANSPORT_ERROR_STATUS);
        assert_eq!(err.message(), "fetch timed out after 10ms");

        let err = FetchError::Json {
            message: "bad".into(),
        };
        assert_eq!(err.status_code(), 600);
    }
}

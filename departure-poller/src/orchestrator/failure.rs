//! Cycle-level failure reported to the display front end.

use serde::{Deserialize, Serialize};

use crate::sl::FetchError;

/// Why a polling cycle produced no departures.
///
/// Serialized as `{ "message": ..., "statusCode": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("cycle failed with status {status_code}: {message}")]
pub struct AggregateFailure {
    pub message: String,
    pub status_code: u16,
}

impl AggregateFailure {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Failure reported when the configuration lists no stations at all.
    pub fn stations_not_defined() -> Self {
        Self::new(500, "config.stations is not defined")
    }
}

impl From<&FetchError> for AggregateFailure {
    fn from(err: &FetchError) -> Self {
        Self::new(err.status_code(), err.message())
    }
}

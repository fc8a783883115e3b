//! Notifications exchanged with the host.
//!
//! The host talks to this process with `{ "notification": NAME, "payload": ... }`
//! messages. Inbound, only `CONFIG` is understood; outbound, every cycle
//! produces either `DEPARTURES` or `SERVICE_FAILURE`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ConfigError, PollingConfig};
use crate::domain::StationResult;
use crate::orchestrator::AggregateFailure;

/// Notification name carrying the configuration.
pub const CONFIG: &str = "CONFIG";

/// Messages from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Full configuration; (re)starts polling.
    Config(PollingConfig),
}

/// Messages to the display front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "notification",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Outbound {
    /// One result per configured station, in configuration order.
    Departures(Vec<StationResult>),
    /// The cycle failed; no departures are sent.
    ServiceFailure(AggregateFailure),
}

#[derive(Deserialize)]
struct Envelope {
    notification: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl Inbound {
    /// Decode one JSON message from the host.
    ///
    /// Returns `Ok(None)`, with a log line, for input that is not a
    /// notification envelope and for notifications this process does not
    /// handle. Only a `CONFIG` notification with an invalid payload is an
    /// error.
    pub fn from_json(json: &str) -> Result<Option<Self>, ConfigError> {
        let envelope: Envelope = match serde_json::from_str(json) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "ignoring input that is not a notification");
                return Ok(None);
            }
        };
        if envelope.notification != CONFIG {
            debug!(notification = %envelope.notification, "ignoring notification");
            return Ok(None);
        }
        PollingConfig::from_value(envelope.payload).map(|config| Some(Inbound::Config(config)))
    }
}

impl Outbound {
    /// The notification name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Outbound::Departures(_) => "DEPARTURES",
            Outbound::ServiceFailure(_) => "SERVICE_FAILURE",
        }
    }

    /// Encode as a single JSON line (no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Vec<StationResult>, AggregateFailure>> for Outbound {
    fn from(result: Result<Vec<StationResult>, AggregateFailure>) -> Self {
        match result {
            Ok(stations) => Outbound::Departures(stations),
            Err(failure) => Outbound::ServiceFailure(failure),
        }
    }
}

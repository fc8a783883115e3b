//! Normalized departures and per-station results.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Direction, LineId};

/// Station name used when the configuration does not provide one.
pub const UNNAMED_STATION: &str = "NotSet";

/// One departure at a station, after normalization.
///
/// Field names on the wire follow what the display front end expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    #[serde(rename = "TransportMode")]
    pub transport_mode: String,

    #[serde(rename = "LineNumber")]
    pub line: LineId,

    /// Public line designation (e.g. "17", "41X").
    #[serde(rename = "Designation")]
    pub designation: String,

    #[serde(rename = "Destination")]
    pub destination: String,

    /// Expected departure time as reported by the provider.
    #[serde(rename = "ExpectedDateTime")]
    pub expected: String,

    #[serde(rename = "JourneyDirection")]
    pub direction: Direction,

    /// Provider-formatted countdown, e.g. "3 min" or "Nu".
    #[serde(rename = "DisplayTime")]
    pub display: String,
}

/// Departures for one station, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationResult {
    #[serde(rename = "StationId")]
    pub station_id: String,

    #[serde(rename = "StationName")]
    pub station_name: String,

    /// When the data was fetched.
    pub obtained: DateTime<Local>,

    /// When the provider data was last updated. The provider does not
    /// report this, so it is the fetch time.
    #[serde(rename = "LatestUpdate")]
    pub latest_update: DateTime<Local>,

    /// Ordered by direction code, then by provider order within a direction.
    pub departures: Vec<Departure>,
}

impl StationResult {
    /// Build a result stamped with the given fetch time.
    pub fn new(
        station_id: impl Into<String>,
        station_name: Option<&str>,
        fetched_at: DateTime<Local>,
        departures: Vec<Departure>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            station_name: station_name.unwrap_or(UNNAMED_STATION).to_string(),
            obtained: fetched_at,
            latest_update: fetched_at,
            departures,
        }
    }
}

//! SL Transport API response DTOs.
//!
//! These types map directly to the `/sites/{id}/departures` JSON response.
//! Only the fields the departure board shows are decoded. Everything except
//! the `departures` array is optional because the provider omits fields
//! rather than sending nulls.

use serde::{Deserialize, Deserializer};

use crate::domain::LineId;

/// Response from `GET /sites/{siteId}/departures`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    /// Departures in provider order (by expected time).
    pub departures: Vec<RawRecord>,
}

/// One element of the `departures` array.
///
/// Elements are decoded one at a time, so a record with a wrong-typed field
/// is kept as [`RawRecord::Malformed`] instead of failing the response.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Departure(RawDeparture),
    /// The element did not have the departure shape; holds the decode error.
    Malformed(String),
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match RawDeparture::deserialize(value) {
            Ok(departure) => RawRecord::Departure(departure),
            Err(e) => RawRecord::Malformed(e.to_string()),
        })
    }
}

impl From<RawDeparture> for RawRecord {
    fn from(departure: RawDeparture) -> Self {
        RawRecord::Departure(departure)
    }
}

/// A single departure as reported by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeparture {
    /// Destination name shown on the vehicle.
    pub destination: Option<String>,

    /// Direction code (0, 1 or 2).
    pub direction_code: Option<u8>,

    /// Countdown text, e.g. "Nu", "3 min" or "10:42".
    pub display: Option<String>,

    /// Expected departure (local time, ISO 8601 without offset).
    pub expected: Option<String>,

    pub line: Option<RawLine>,
}

/// Line information attached to a departure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLine {
    /// Numeric line id.
    pub id: Option<LineId>,

    /// Public designation, e.g. "17" or "41X".
    pub designation: Option<String>,

    /// Transport mode, e.g. "METRO", "BUS", "TRAM".
    pub transport_mode: Option<String>,
}

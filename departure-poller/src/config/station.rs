//! Per-station configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, LineId};

use super::de::{optional_direction, string_or_number};

/// Default forecast horizon in minutes.
pub const DEFAULT_FORECAST_MINS: u32 = 60;

/// A station to poll, with optional line rules.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationConfig {
    /// Provider site id. Accepted as a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub station_id: String,

    /// How many minutes ahead to ask the provider for.
    #[serde(default = "default_forecast")]
    pub forecast: u32,

    /// Direction passed to the provider as a query parameter.
    #[serde(default, deserialize_with = "optional_direction")]
    pub direction: Option<Direction>,

    /// Display name. Results show "NotSet" when absent.
    #[serde(default)]
    pub station_name: Option<String>,

    /// Line allow-rules. `None` or empty keeps every line.
    #[serde(default)]
    pub lines: Option<Vec<LineRule>>,
}

/// A rule selecting (and optionally fixing) one line at a station.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRule {
    pub line: LineId,

    /// Only departures in this direction are kept.
    #[serde(default, deserialize_with = "optional_direction")]
    pub direction: Option<Direction>,

    /// Swap directions 1 and 2 for this line before filtering.
    #[serde(default)]
    pub swap_dir: bool,
}

impl StationConfig {
    /// Create a station with the default forecast and no rules.
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            forecast: DEFAULT_FORECAST_MINS,
            direction: None,
            station_name: None,
            lines: None,
        }
    }

    /// Set the line rules.
    pub fn with_lines(mut self, lines: Vec<LineRule>) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.station_name = Some(name.into());
        self
    }

    /// The configured line rules, empty when none are set.
    pub fn rules(&self) -> &[LineRule] {
        self.lines.as_deref().unwrap_or(&[])
    }
}

impl LineRule {
    /// A rule that keeps every direction of `line`.
    pub fn new(line: impl Into<LineId>) -> Self {
        Self {
            line: line.into(),
            direction: None,
            swap_dir: false,
        }
    }

    /// Keep only departures in `direction`.
    pub fn with_direction(mut self, direction: u8) -> Self {
        self.direction = Some(Direction::new(direction));
        self
    }

    /// Swap directions 1 and 2 for this line.
    pub fn swapped(mut self) -> Self {
        self.swap_dir = true;
        self
    }
}

fn default_forecast() -> u32 {
    DEFAULT_FORECAST_MINS
}

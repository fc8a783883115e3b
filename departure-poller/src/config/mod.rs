//! Polling configuration.
//!
//! The host delivers one JSON configuration object at startup. It is parsed
//! into typed structs here and validated once; structural problems (a
//! `lines` or `times` entry that is not an array, an unparseable clock
//! time) are rejected before any polling starts.

mod de;
mod error;
mod polling;
mod station;

pub use error::ConfigError;
pub use polling::{
    DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_UPDATE_INTERVAL_MS, DayClass,
    HighUpdateInterval, PollingConfig, TimeWindow,
};
pub use station::{DEFAULT_FORECAST_MINS, LineRule, StationConfig};

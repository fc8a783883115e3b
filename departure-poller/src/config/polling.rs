//! Top-level polling configuration.

use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::{ClockTime, Direction};

use super::de::optional_direction;
use super::error::ConfigError;
use super::station::StationConfig;

/// Default SL Transport API base URL.
pub const DEFAULT_BASE_URL: &str = "https://transport.integration.sl.se/v1";

/// Default polling interval: 5 minutes.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 5 * 60 * 1000;

/// Default per-fetch timeout: 30 seconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30 * 1000;

/// Configuration delivered by the host at startup.
///
/// Intervals are in milliseconds, matching the host's configuration format.
/// Unknown keys (display options for the front end) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingConfig {
    /// Base polling interval (ms), used outside any time window.
    #[serde(rename = "updateInterval", default = "default_update_interval")]
    pub update_interval_ms: u64,

    /// Faster polling during configured time windows.
    #[serde(default)]
    pub high_update_interval: Option<HighUpdateInterval>,

    /// Stations to poll, in display order.
    #[serde(default)]
    pub stations: Option<Vec<StationConfig>>,

    /// Global direction filter. An empty string means no filter.
    #[serde(default, deserialize_with = "optional_direction")]
    pub direction: Option<Direction>,

    /// Outbound proxy URL for provider requests.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Log every departure as it passes through the pipeline.
    #[serde(default)]
    pub debug: bool,

    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on a single station fetch (ms).
    #[serde(rename = "fetchTimeout", default = "default_fetch_timeout")]
    pub fetch_timeout_ms: u64,
}

/// Polling windows with their own (usually shorter) interval.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighUpdateInterval {
    /// Interval (ms) shared by windows that do not set their own.
    #[serde(rename = "updateInterval", default)]
    pub update_interval_ms: Option<u64>,

    /// Windows checked in order; the first match wins.
    #[serde(default)]
    pub times: Option<Vec<TimeWindow>>,
}

/// A daily time window on either weekdays or weekends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub days: DayClass,
    pub start: ClockTime,
    pub stop: ClockTime,

    /// Interval (ms) for this window, overriding the shared one.
    #[serde(rename = "updateInterval", default)]
    pub update_interval_ms: Option<u64>,
}

/// Which days a time window applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    /// Monday to Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
}

impl DayClass {
    /// Whether `day` belongs to this class.
    pub fn matches(&self, day: Weekday) -> bool {
        // Sunday = 0 .. Saturday = 6
        let dow = day.num_days_from_sunday();
        match self {
            DayClass::Weekdays => (1..=5).contains(&dow),
            DayClass::Weekends => dow == 0 || dow == 6,
        }
    }

    /// Whether the date of `now` belongs to this class.
    pub fn matches_date(&self, now: impl Datelike) -> bool {
        self.matches(now.weekday())
    }
}

impl PollingConfig {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from an already-decoded JSON value and validate it.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// A configuration polling the given stations with all defaults.
    pub fn with_stations(stations: Vec<StationConfig>) -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            high_update_interval: None,
            stations: Some(stations),
            direction: None,
            proxy: None,
            debug: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    /// Check semantic constraints that the JSON shape cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.update_interval_ms == 0 {
            return Err(ConfigError::Setting {
                setting: "updateInterval",
                message: "must be greater than zero".to_string(),
            });
        }

        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::Setting {
                setting: "fetchTimeout",
                message: "must be greater than zero".to_string(),
            });
        }

        if let Some(high) = &self.high_update_interval {
            if high.update_interval_ms == Some(0) {
                return Err(ConfigError::Setting {
                    setting: "highUpdateInterval.updateInterval",
                    message: "must be greater than zero".to_string(),
                });
            }
            let windows = high.times.as_deref().unwrap_or(&[]);
            if windows.iter().any(|w| w.update_interval_ms == Some(0)) {
                return Err(ConfigError::Setting {
                    setting: "highUpdateInterval.times.updateInterval",
                    message: "must be greater than zero".to_string(),
                });
            }
        }

        for station in self.stations.as_deref().unwrap_or(&[]) {
            if station.station_id.trim().is_empty() {
                return Err(ConfigError::Station {
                    station: station.station_id.clone(),
                    message: "stationId must not be empty".to_string(),
                });
            }
            if station.forecast == 0 {
                return Err(ConfigError::Station {
                    station: station.station_id.clone(),
                    message: "forecast must be positive".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Base polling interval.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// Per-fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl HighUpdateInterval {
    /// Shared high-frequency interval, if configured.
    pub fn update_interval(&self) -> Option<Duration> {
        self.update_interval_ms.map(Duration::from_millis)
    }
}

impl TimeWindow {
    /// This window's own interval, if configured.
    pub fn update_interval(&self) -> Option<Duration> {
        self.update_interval_ms.map(Duration::from_millis)
    }
}

fn default_update_interval() -> u64 {
    DEFAULT_UPDATE_INTERVAL_MS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_MS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let config = PollingConfig::from_json(r#"{"stations": []}"#).unwrap();
        assert_eq!(config.update_interval(), Duration::from_secs(300));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.direction, None);
        assert_eq!(config.proxy, None);
        assert!(!config.debug);
        assert!(config.high_update_interval.is_none());
    }

    #[test]
    fn stations_may_be_absent() {
        let config = PollingConfig::from_json("{}").unwrap();
        assert!(config.stations.is_none());
    }

    #[test]
    fn full_config() {
        let json = r#"{
            "updateInterval": 120000,
            "proxy": "http://proxy.local:3128",
            "debug": true,
            "direction": "1",
            "displaycount": 7,
            "highUpdateInterval": {
                "updateInterval": 30000,
                "times": [
                    {"days": "weekdays", "start": "07:00", "stop": "9:00"},
                    {"days": "weekends", "start": "11:00", "stop": "13:00", "updateInterval": 60000}
                ]
            },
            "stations": [{"stationId": "2322", "forecast": 60}]
        }"#;
        let config = PollingConfig::from_json(json).unwrap();

        assert_eq!(config.update_interval(), Duration::from_secs(120));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert!(config.debug);
        assert_eq!(config.direction, Some(Direction::new(1)));

        let high = config.high_update_interval.unwrap();
        assert_eq!(high.update_interval(), Some(Duration::from_secs(30)));
        let times = high.times.unwrap();
        assert_eq!(times.len(), 2);
        assert_eq!(times[0].days, DayClass::Weekdays);
        assert_eq!(times[0].stop, ClockTime::new(9, 0).unwrap());
        assert_eq!(times[0].update_interval(), None);
        assert_eq!(times[1].update_interval(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn global_direction_forms() {
        let parse = |dir: &str| {
            PollingConfig::from_json(&format!(r#"{{"direction": {dir}}}"#)).map(|c| c.direction)
        };
        assert_eq!(parse("2").unwrap(), Some(Direction::new(2)));
        assert_eq!(parse("\"2\"").unwrap(), Some(Direction::new(2)));
        assert_eq!(parse("\"\"").unwrap(), None);
        assert_eq!(parse("null").unwrap(), None);
        assert!(parse("\"north\"").is_err());
    }

    #[test]
    fn times_must_be_array() {
        let json = r#"{"highUpdateInterval": {"times": {"days": "weekdays"}}}"#;
        assert!(matches!(
            PollingConfig::from_json(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn bad_clock_time_rejected() {
        let json = r#"{"highUpdateInterval": {"times": [
            {"days": "weekdays", "start": "25:00", "stop": "09:00"}
        ]}}"#;
        assert!(PollingConfig::from_json(json).is_err());
    }

    #[test]
    fn unknown_day_class_rejected() {
        let json = r#"{"highUpdateInterval": {"times": [
            {"days": "holidays", "start": "07:00", "stop": "09:00"}
        ]}}"#;
        assert!(PollingConfig::from_json(json).is_err());
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        assert!(matches!(
            PollingConfig::from_json(r#"{"updateInterval": 0}"#),
            Err(ConfigError::Setting { setting: "updateInterval", .. })
        ));
        assert!(matches!(
            PollingConfig::from_json(r#"{"fetchTimeout": 0}"#),
            Err(ConfigError::Setting { setting: "fetchTimeout", .. })
        ));
        assert!(PollingConfig::from_json(
            r#"{"highUpdateInterval": {"updateInterval": 0, "times": []}}"#
        )
        .is_err());
    }

    #[test]
    fn validate_rejects_bad_stations() {
        assert!(matches!(
            PollingConfig::from_json(r#"{"stations": [{"stationId": " "}]}"#),
            Err(ConfigError::Station { .. })
        ));
        assert!(matches!(
            PollingConfig::from_json(r#"{"stations": [{"stationId": "1", "forecast": 0}]}"#),
            Err(ConfigError::Station { .. })
        ));
    }

    #[test]
    fn day_classes() {
        use Weekday::*;
        for day in [Mon, Tue, Wed, Thu, Fri] {
            assert!(DayClass::Weekdays.matches(day));
            assert!(!DayClass::Weekends.matches(day));
        }
        for day in [Sat, Sun] {
            assert!(DayClass::Weekends.matches(day));
            assert!(!DayClass::Weekdays.matches(day));
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"stations": [{"stationId": "2322"}]}"#).unwrap();

        let config = PollingConfig::from_path(&path).unwrap();
        assert_eq!(config.stations.unwrap()[0].station_id, "2322");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PollingConfig::from_path("/nonexistent/departures.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/departures.json"));
    }

    #[test]
    fn with_stations_is_valid() {
        let config = PollingConfig::with_stations(vec![StationConfig::new("2322")]);
        assert!(config.validate().is_ok());
        assert_eq!(config.stations.as_deref().map(<[_]>::len), Some(1));
    }
}

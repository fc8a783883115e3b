//! Clock times used by polling windows.
//!
//! Windows are configured as "HH:MM" (or "H:MM") strings. Comparison happens
//! at minute resolution on a single day; there is no notion of a window
//! crossing midnight.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid clock time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {input:?}: {reason}")]
pub struct ClockTimeError {
    input: String,
    reason: &'static str,
}

impl ClockTimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A time of day with minute resolution.
///
/// # Examples
///
/// ```
/// use departure_poller::domain::ClockTime;
///
/// let t = ClockTime::parse("7:05").unwrap();
/// assert_eq!(t.to_string(), "07:05");
///
/// assert!(ClockTime::parse("24:00").is_err());
/// assert!(ClockTime::parse("0700").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time, returning `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse "H:MM" or "HH:MM".
    pub fn parse(s: &str) -> Result<Self, ClockTimeError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| ClockTimeError::new(s, "expected HH:MM format"))?;

        if hours.is_empty() || hours.len() > 2 {
            return Err(ClockTimeError::new(s, "hour must have one or two digits"));
        }
        if minutes.len() != 2 {
            return Err(ClockTimeError::new(s, "minute must have two digits"));
        }

        let hour = parse_digits(hours).ok_or_else(|| ClockTimeError::new(s, "invalid hour digits"))?;
        let minute =
            parse_digits(minutes).ok_or_else(|| ClockTimeError::new(s, "invalid minute digits"))?;

        if hour > 23 {
            return Err(ClockTimeError::new(s, "hour must be 0-23"));
        }
        if minute > 59 {
            return Err(ClockTimeError::new(s, "minute must be 0-59"));
        }

        Ok(Self { hour, minute })
    }

    /// Truncate a time of day to minute resolution.
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn parse_digits(s: &str) -> Option<u8> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

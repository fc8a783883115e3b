//! Polling interval selection.

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{error, warn};

use crate::config::{PollingConfig, TimeWindow};
use crate::domain::ClockTime;

/// Pick the polling interval that applies at `now` (local time).
///
/// The first time window containing `now` wins and yields its own interval,
/// or the shared high-frequency interval. Outside every window the base
/// interval applies.
pub fn select_interval(config: &PollingConfig, now: NaiveDateTime) -> Duration {
    let base = config.update_interval();

    let Some(high) = &config.high_update_interval else {
        return base;
    };

    let Some(windows) = high.times.as_deref() else {
        error!("highUpdateInterval.times is undefined in configuration");
        error!("remove the highUpdateInterval parameter if it is not used");
        return base;
    };

    match windows.iter().find(|window| window_applies(window, now)) {
        Some(window) => window
            .update_interval()
            .or_else(|| high.update_interval())
            .unwrap_or_else(|| {
                warn!("matching window has no interval and highUpdateInterval.updateInterval is not set");
                base
            }),
        None => base,
    }
}

/// Whether a window's day class and clock range both contain `now`.
pub fn window_applies(window: &TimeWindow, now: NaiveDateTime) -> bool {
    window.days.matches_date(now)
        && clock_range_contains(window.start, window.stop, ClockTime::from_time(now.time()))
}

/// Strict same-day range check at minute resolution.
///
/// Reversed ranges are swapped, not wrapped around midnight: "22:00"-"06:00"
/// behaves like "06:00"-"22:00".
fn clock_range_contains(start: ClockTime, stop: ClockTime, now: ClockTime) -> bool {
    let (start, stop) = if start > stop { (stop, start) } else { (start, stop) };
    start < now && now < stop
}

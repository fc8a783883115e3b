//! Line and direction filters.

use crate::config::StationConfig;
use crate::domain::{Departure, Direction};

/// Whether a station's line rules keep this departure.
///
/// Without rules every departure is kept. Otherwise the first rule for the
/// departure's line decides: a rule with a direction keeps only that
/// direction, a rule without one keeps the whole line. Lines without a rule
/// are dropped.
pub fn keep(station: &StationConfig, departure: &Departure) -> bool {
    let rules = station.rules();
    if rules.is_empty() {
        return true;
    }

    rules
        .iter()
        .find(|rule| rule.line.matches(&departure.line))
        .is_some_and(|rule| {
            rule.direction
                .is_none_or(|direction| direction == departure.direction)
        })
}

/// Whether the global direction filter keeps this departure.
pub fn wanted_direction(global: Option<Direction>, departure: &Departure) -> bool {
    global.is_none_or(|direction| direction == departure.direction)
}

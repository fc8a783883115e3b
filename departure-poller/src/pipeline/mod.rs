//! Departure transformation pipeline.
//!
//! Each raw provider departure is normalized, has its direction fixed per
//! the station's line rules, and is then filtered by line/direction rules
//! and the global direction filter. Survivors are grouped by direction code.
//!
//! Records that cannot be normalized, or whose direction cannot be swapped,
//! are dropped with a warning; they never fail the station.

mod direction;
mod filter;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::{PollingConfig, StationConfig};
use crate::domain::{Departure, Direction};
use crate::sl::{RawRecord, normalize_record};

pub use direction::fix_direction;
pub use filter::{keep, wanted_direction};

/// Run every raw departure for a station through the pipeline.
///
/// The result is ordered by direction code, then by provider order within
/// each direction.
pub fn process_departures(
    station: &StationConfig,
    config: &PollingConfig,
    raw: &[RawRecord],
) -> Vec<Departure> {
    let mut by_direction: BTreeMap<Direction, Vec<Departure>> = BTreeMap::new();

    for record in raw {
        let departure = match normalize_record(record) {
            Ok(departure) => departure,
            Err(e) => {
                warn!(station = %station.station_id, error = %e, "skipping malformed departure");
                continue;
            }
        };

        let departure = match fix_direction(station, departure) {
            Ok(departure) => departure,
            Err(e) => {
                warn!(station = %station.station_id, error = %e, "dropping departure");
                continue;
            }
        };

        if !keep(station, &departure) || !wanted_direction(config.direction, &departure) {
            continue;
        }

        if config.debug {
            debug!(
                station = %station.station_id,
                line = %departure.line,
                direction = %departure.direction,
                destination = %departure.destination,
                "adding departure"
            );
        }

        by_direction
            .entry(departure.direction)
            .or_default()
            .push(departure);
    }

    by_direction.into_values().flatten().collect()
}

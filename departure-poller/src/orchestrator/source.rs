//! Where station departures come from.

use crate::config::StationConfig;
use crate::sl::{FetchError, RawRecord, SlClient};

/// Trait for fetching raw departures for one station.
///
/// This abstraction allows the orchestrator to be tested without HTTP.
pub trait DepartureSource {
    /// Fetch the raw departures for `station`, one request, no retries.
    async fn fetch(&self, station: &StationConfig) -> Result<Vec<RawRecord>, FetchError>;
}

impl DepartureSource for SlClient {
    async fn fetch(&self, station: &StationConfig) -> Result<Vec<RawRecord>, FetchError> {
        self.get_departures(&station.station_id, station.forecast, station.direction)
            .await
    }
}

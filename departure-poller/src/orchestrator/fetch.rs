//! Concurrent fetch of every configured station.

use std::time::Duration;

use chrono::Local;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::{PollingConfig, StationConfig};
use crate::domain::StationResult;
use crate::pipeline::process_departures;
use crate::sl::FetchError;

use super::failure::AggregateFailure;
use super::source::DepartureSource;

/// Fetches all stations of a configuration and aggregates the results.
///
/// A cycle either yields one [`StationResult`] per station, in
/// configuration order, or a single [`AggregateFailure`]. Partial results
/// are never returned.
pub struct StationFetchOrchestrator<S> {
    source: S,
    fetch_timeout: Duration,
}

impl<S: DepartureSource> StationFetchOrchestrator<S> {
    /// Create an orchestrator that bounds each station fetch by `fetch_timeout`.
    pub fn new(source: S, fetch_timeout: Duration) -> Self {
        Self {
            source,
            fetch_timeout,
        }
    }

    /// Access the underlying departure source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one polling cycle.
    ///
    /// All station fetches run concurrently and are awaited to completion.
    /// If any of them failed, the first failure in configuration order is
    /// returned.
    pub async fn run(&self, config: &PollingConfig) -> Result<Vec<StationResult>, AggregateFailure> {
        let Some(stations) = config.stations.as_deref() else {
            warn!("stations not defined in configuration");
            return Err(AggregateFailure::stations_not_defined());
        };

        let fetches = stations
            .iter()
            .map(|station| self.fetch_station(station, config));

        let results = join_all(fetches).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            debug!(failed, total = results.len(), "one or more stations failed");
        }

        results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AggregateFailure::from(&e))
    }

    /// Fetch and process one station.
    async fn fetch_station(
        &self,
        station: &StationConfig,
        config: &PollingConfig,
    ) -> Result<StationResult, FetchError> {
        info!(station = %station.station_id, "getting departures");

        let raw = match tokio::time::timeout(self.fetch_timeout, self.source.fetch(station)).await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                warn!(
                    station = %station.station_id,
                    status = e.status_code(),
                    error = %e,
                    "failed to fetch departures"
                );
                return Err(e);
            }
            Err(_) => {
                let e = FetchError::Timeout(self.fetch_timeout);
                warn!(station = %station.station_id, error = %e, "failed to fetch departures");
                return Err(e);
            }
        };

        let departures = process_departures(station, config, &raw);

        info!(
            station = %station.station_id,
            count = departures.len(),
            "found departures"
        );

        Ok(StationResult::new(
            station.station_id.clone(),
            station.station_name.as_deref(),
            Local::now(),
            departures,
        ))
    }
}

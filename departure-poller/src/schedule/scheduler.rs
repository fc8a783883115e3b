//! The polling loop.

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::{ConfigError, PollingConfig};
use crate::notify::{Inbound, Outbound};
use crate::orchestrator::{DepartureSource, StationFetchOrchestrator};
use crate::sl::FetchError;

use super::interval::select_interval;

/// Errors that stop the scheduler.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// A configuration event carried an invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The departure source could not be built from the configuration
    #[error("failed to create departure client: {0}")]
    Client(#[from] FetchError),
}

/// Why the scheduler woke up between cycles.
enum Wake {
    Timer,
    Reconfigure(PollingConfig),
}

/// Runs polling cycles on a timer and publishes their outcome.
///
/// `make_source` builds the departure source for each configuration, so a
/// new configuration can change the proxy or base URL.
pub struct Scheduler<F> {
    make_source: F,
}

impl<S, F> Scheduler<F>
where
    S: DepartureSource,
    F: Fn(&PollingConfig) -> Result<S, FetchError>,
{
    pub fn new(make_source: F) -> Self {
        Self { make_source }
    }

    /// Poll until the outbound receiver goes away.
    ///
    /// Waits for the first configuration, runs a cycle immediately, then
    /// re-arms the timer after each cycle using the interval in force at
    /// that moment. Cycles never overlap. A configuration arriving while
    /// waiting replaces the current one and triggers an immediate cycle.
    pub async fn run(
        &self,
        mut inbound: mpsc::Receiver<Inbound>,
        outbound: mpsc::Sender<Outbound>,
    ) -> Result<(), SchedulerError> {
        let Some(Inbound::Config(mut config)) = inbound.recv().await else {
            info!("inbound channel closed before any configuration arrived");
            return Ok(());
        };
        let mut inbound_open = true;

        loop {
            config.validate()?;
            info!(
                stations = config.stations.as_deref().map_or(0, <[_]>::len),
                "starting polling"
            );
            let orchestrator =
                StationFetchOrchestrator::new((self.make_source)(&config)?, config.fetch_timeout());

            let next_config = loop {
                let event = Outbound::from(orchestrator.run(&config).await);
                debug!(notification = event.name(), "publishing");
                if outbound.send(event).await.is_err() {
                    info!("outbound channel closed, stopping");
                    return Ok(());
                }

                let wait = select_interval(&config, Local::now().naive_local());
                debug!(?wait, "next update scheduled");

                let sleep = tokio::time::sleep(wait);
                tokio::pin!(sleep);

                let wake = loop {
                    tokio::select! {
                        _ = &mut sleep => break Wake::Timer,
                        message = inbound.recv(), if inbound_open => match message {
                            Some(Inbound::Config(new_config)) => break Wake::Reconfigure(new_config),
                            None => {
                                debug!("inbound channel closed, keeping current configuration");
                                inbound_open = false;
                            }
                        },
                    }
                };

                if let Wake::Reconfigure(new_config) = wake {
                    break new_config;
                }
            };

            info!("configuration replaced");
            config = next_config;
        }
    }
}

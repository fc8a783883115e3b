use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use departure_poller::config::{ConfigError, PollingConfig};
use departure_poller::notify::{Inbound, Outbound};
use departure_poller::schedule::Scheduler;
use departure_poller::sl::{SlClient, SlConfig};

/// Optional path to a configuration file used before (or instead of) a
/// `CONFIG` notification on stdin.
const CONFIG_PATH_VAR: &str = "DEPARTURES_CONFIG";

const CHANNEL_CAPACITY: usize = 16;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (inbound_tx, inbound_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (outbound_tx, outbound_rx) = mpsc::channel(CHANNEL_CAPACITY);

    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        match PollingConfig::from_path(&path) {
            Ok(config) => {
                info!(%path, "loaded configuration file");
                // The receiver is still held here, so this cannot fail.
                let _ = inbound_tx.send(Inbound::Config(config)).await;
            }
            Err(e) => {
                error!(%path, "{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let reader = tokio::spawn(read_notifications(inbound_tx));
    let writer = tokio::spawn(write_notifications(outbound_rx));

    let scheduler = Scheduler::new(|config: &PollingConfig| {
        SlClient::new(SlConfig::from_polling(config))
    });

    let code = tokio::select! {
        result = scheduler.run(inbound_rx, outbound_tx) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        },
        Ok(Err(e)) = reader => {
            error!("{e}");
            ExitCode::FAILURE
        }
    };

    // Let already queued notifications reach stdout.
    if let Err(e) = writer.await {
        warn!("output task failed: {e}");
    }
    code
}

/// Forward `CONFIG` notifications from stdin, one JSON message per line.
async fn read_notifications(inbound: mpsc::Sender<Inbound>) -> Result<(), ConfigError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("failed to read stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        // Only an invalid CONFIG payload is fatal; other input is logged and skipped.
        if let Some(notification) = Inbound::from_json(&line)? {
            if inbound.send(notification).await.is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Write each outbound notification to stdout as one JSON line.
async fn write_notifications(mut outbound: mpsc::Receiver<Outbound>) {
    let mut stdout = tokio::io::stdout();

    while let Some(event) = outbound.recv().await {
        let json = match event.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!(notification = event.name(), "failed to encode: {e}");
                continue;
            }
        };
        let written = async {
            stdout.write_all(json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await
        };
        if let Err(e) = written.await {
            error!("failed to write stdout: {e}");
            break;
        }
    }
}

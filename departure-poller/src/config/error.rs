//! Configuration error types.

use std::path::PathBuf;

/// Errors in the polling configuration.
///
/// All of these are fatal: a configuration that fails to parse or validate
/// never starts a polling cycle.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or does not have the expected shape
    /// (e.g. `lines` or `times` is not an array).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A station entry is inconsistent
    #[error("station {station}: {message}")]
    Station { station: String, message: String },

    /// A top-level setting is out of range
    #[error("invalid setting {setting}: {message}")]
    Setting {
        setting: &'static str,
        message: String,
    },
}

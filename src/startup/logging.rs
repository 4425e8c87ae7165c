//! File logging.
//!
//! The terminal belongs to the TUI, so events go to
//! `<data dir>/artgrid/artgrid.log`. `ARTGRID_LOG` takes a standard
//! `EnvFilter` directive string (default `info`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "ARTGRID_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where the log file lives, if the platform has a data directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("artgrid").join("artgrid.log"))
}

/// Build the filter from a directive string, keeping HTTP internals quiet.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directives = [level, "hyper=warn", "reqwest=warn", "rustls=warn"].join(",");
    EnvFilter::try_new(directives)
}

/// Install the global subscriber writing to `file_path`.
pub fn init_logging(level: &str, file_path: &Path) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(file_path)?;

    let filter = build_env_filter(level)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    tracing::debug!(path = %file_path.display(), level, "logging initialized");
    Ok(())
}

/// Best-effort logging setup from the environment. Failures leave logging
/// disabled rather than stopping the app.
pub fn init_from_env() -> Option<PathBuf> {
    let level = std::env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let path = default_log_path()?;
    init_logging(&level, &path).ok()?;
    Some(path)
}

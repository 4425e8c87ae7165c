//! Startup: configuration and logging, both settled before the terminal is
//! taken over.
//!
//! - [`config`] - [`AppConfig`] builder, environment and flag overrides
//! - [`logging`] - file-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use artgrid::startup::{logging, AppConfig};
//!
//! let config = AppConfig::from_env()?.apply_overrides(&overrides);
//! config.validate()?;
//! logging::init_from_env();
//! ```

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, MAX_PAGE_SIZE};

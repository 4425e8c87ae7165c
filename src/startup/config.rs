//! Application configuration.
//!
//! Defaults, then `ARTGRID_*` environment variables, then command-line
//! overrides; [`AppConfig::validate`] runs last.

use std::time::Duration;
use thiserror::Error;

use crate::cli::CliOverrides;
use crate::source::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

/// Largest page the collection API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "ARTGRID_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "ARTGRID_PAGE_SIZE";
pub const ENV_TIMEOUT_SECS: &str = "ARTGRID_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size must be between 1 and {max}, got {value}", max = MAX_PAGE_SIZE)]
    PageSizeOutOfRange { value: u32 },

    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("start page must be at least 1")]
    InvalidStartPage,

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("{name}: expected a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Configuration for a run of the browser.
///
/// # Example
///
/// ```ignore
/// use artgrid::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_page_size(24)
///     .with_start_page(3);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Collection API root, without a trailing slash
    pub base_url: String,
    /// Rows per page
    pub page_size: u32,
    /// Page shown on launch (1-based)
    pub start_page: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            start_page: 1,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults overlaid with `ARTGRID_BASE_URL`, `ARTGRID_PAGE_SIZE` and
    /// `ARTGRID_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_number(ENV_PAGE_SIZE, &size)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        Ok(config)
    }

    /// Apply command-line flags on top.
    pub fn apply_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.base_url {
            self.base_url = url.clone();
        }
        if let Some(size) = overrides.page_size {
            self.page_size = size;
        }
        if let Some(page) = overrides.start_page {
            self.start_page = page;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::PageSizeOutOfRange {
                value: self.page_size,
            });
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.start_page == 0 {
            return Err(ConfigError::InvalidStartPage);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

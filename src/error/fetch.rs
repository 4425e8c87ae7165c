//! Errors produced while fetching pages and accumulating selections.

use thiserror::Error;

use super::{ErrorCategory, NetworkError};
use crate::models::Artwork;

/// Failure to produce a page from the remote source.
///
/// An empty page is not a failure; it is how the source signals the end of
/// the collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Page indices are 1-based
    #[error("page index must be at least 1, got {0}")]
    InvalidPage(u32),

    /// Transport-level failure or non-2xx status
    #[error("failed to fetch page {page}: {source}")]
    Network {
        page: u32,
        #[source]
        source: NetworkError,
    },

    /// The response body was not a valid page payload
    #[error("failed to decode page {page}: {message}")]
    Decode { page: u32, message: String },
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::InvalidPage(_) => ErrorCategory::Client,
            FetchError::Network { source, .. } => source.category(),
            FetchError::Decode { .. } => ErrorCategory::Server,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network { source, .. } => source.is_retryable(),
            FetchError::Decode { .. } => true,
            FetchError::InvalidPage(_) => false,
        }
    }

    /// Short text for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidPage(page) => format!("Page {} does not exist.", page),
            FetchError::Network { source, .. } => source.user_message(),
            FetchError::Decode { .. } => {
                "Received an invalid response from the collection API.".to_string()
            }
        }
    }
}

/// A bulk-selection walk that stopped because a page could not be fetched.
///
/// `rows` holds everything collected before the failing page, in source order.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("bulk selection stopped at page {page} after {} rows: {source}", .rows.len())]
pub struct AccumulateError {
    pub page: u32,
    pub rows: Vec<Artwork>,
    #[source]
    pub source: FetchError,
}

impl AccumulateError {
    pub fn collected(&self) -> usize {
        self.rows.len()
    }
}

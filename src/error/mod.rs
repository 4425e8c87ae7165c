//! Error types for artgrid.
//!
//! - **Error Categories**: high-level classification for retry and messaging
//! - **Network Errors**: transport failures from the HTTP client
//! - **Fetch Errors**: a page could not be produced (network, decode, bad index)
//! - **Accumulate Errors**: a bulk-selection walk stopped part-way
//!
//! Nothing in the library panics on a failed request; failures travel as
//! `Result`s up to the [`crate::app::App`] facade, which turns them into a
//! status line.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Server | 5xx, malformed payload | Yes |
//! | Client | Programming errors | No |
//! | User | Invalid input | No |
//! | Configuration | Bad flags or env | No |

mod category;
mod fetch;
mod network;

pub use category::ErrorCategory;
pub use fetch::{AccumulateError, FetchError};
pub use network::NetworkError;

/// Result alias for page fetches.
pub type FetchResult<T> = Result<T, FetchError>;

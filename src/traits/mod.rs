//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the collection API source
//! - [`PageSource`] - 1-based paginated row source consumed by the
//!   pagination controller and the selection accumulator

pub mod http;
pub mod source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use source::PageSource;

//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySource`] - page source over a fixed row list, with fetch
//!   recording, injected failures and per-page delays

pub mod http;
pub mod source;

pub use http::{MockHttpClient, MockResponse};
pub use source::InMemorySource;

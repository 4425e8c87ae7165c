//! Remote row sources.
//!
//! [`ArticSource`] is the production [`PageSource`]; tests use
//! [`crate::adapters::mock::InMemorySource`].

mod artic;
mod payloads;

pub use artic::{ArticSource, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use payloads::{ListingResponse, Pagination};

use crate::models::Page;
use crate::traits::PageSource;

/// Fetch a page, collapsing any failure into an empty page.
///
/// Callers that use this cannot tell "past the last page" from "request
/// failed"; the failure is only visible in the log.
pub async fn fetch_or_empty<S: PageSource + ?Sized>(source: &S, page_index: u32) -> Page {
    match source.fetch(page_index).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(page = page_index, error = %e, "page fetch failed, treating as empty");
            Page::empty(page_index)
        }
    }
}

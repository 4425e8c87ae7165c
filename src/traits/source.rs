//! Paginated row source abstraction.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::Page;

/// A remote source addressed by 1-based page number.
///
/// Implementations hold no per-request state, so one instance can serve
/// overlapping page loads and bulk-selection walks concurrently.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page.
    ///
    /// `Ok` with no rows means the source has nothing at or past this index.
    /// Transport and decode failures are `Err`, never an empty page.
    async fn fetch(&self, page_index: u32) -> FetchResult<Page>;

    /// Rows per page the source serves, used for page-count math.
    fn page_size(&self) -> u32;
}

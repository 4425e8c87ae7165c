//! Art Institute of Chicago collection API source.

use async_trait::async_trait;
use std::sync::Arc;

use super::payloads::ListingResponse;
use crate::error::{FetchError, FetchResult, NetworkError};
use crate::models::Page;
use crate::traits::{Headers, HttpClient, PageSource};

/// Public collection API root.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Rows per page shown by the table.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Fields requested from the API; keeps payloads small.
const FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// [`PageSource`] over `GET {base_url}/artworks?page=N&limit=L`.
///
/// Generic over the HTTP client so tests can inject
/// [`crate::adapters::mock::MockHttpClient`].
#[derive(Debug)]
pub struct ArticSource<C: HttpClient> {
    client: Arc<C>,
    base_url: String,
    page_size: u32,
}

impl<C: HttpClient> ArticSource<C> {
    pub fn new(client: C, base_url: impl Into<String>, page_size: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Arc::new(client),
            base_url,
            page_size: page_size.max(1),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for one page of the listing.
    pub fn page_url(&self, page_index: u32) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.base_url, page_index, self.page_size, FIELDS
        )
    }

    fn headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }
}

#[async_trait]
impl<C: HttpClient + 'static> PageSource for ArticSource<C> {
    async fn fetch(&self, page_index: u32) -> FetchResult<Page> {
        if page_index == 0 {
            return Err(FetchError::InvalidPage(page_index));
        }

        let url = self.page_url(page_index);
        tracing::debug!(page = page_index, %url, "fetching page");

        let response = self
            .client
            .get(&url, &Self::headers())
            .await
            .map_err(|e| FetchError::Network {
                page: page_index,
                source: NetworkError::from_http(e, &url),
            })?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Network {
                page: page_index,
                source: if response.status == 429 {
                    NetworkError::RateLimited
                } else {
                    NetworkError::HttpStatus {
                        status: response.status,
                        message,
                    }
                },
            });
        }

        let listing: ListingResponse = response.json().map_err(|e| FetchError::Decode {
            page: page_index,
            message: e.to_string(),
        })?;

        tracing::debug!(
            page = page_index,
            rows = listing.data.len(),
            total = listing.pagination.total,
            "page fetched"
        );

        Ok(Page::new(page_index, listing.data, listing.pagination.total))
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

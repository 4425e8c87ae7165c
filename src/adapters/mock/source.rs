//! In-memory page source for testing.
//!
//! Serves a fixed list of artworks in pages of a configurable size and
//! records every fetch, so tests can assert on request counts, ordering and
//! concurrency.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::models::{Artwork, Page};
use crate::traits::PageSource;

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Artwork>,
    fetches: Vec<u32>,
    failures: HashMap<u32, FetchError>,
    delays: HashMap<u32, Duration>,
}

/// Page source backed by a `Vec<Artwork>`.
///
/// Clones share state, so a test can keep a handle while the controller owns
/// another.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    inner: Arc<Mutex<Inner>>,
    page_size: u32,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl InMemorySource {
    pub fn new(rows: Vec<Artwork>, page_size: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                rows,
                ..Inner::default()
            })),
            page_size: page_size.max(1),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `total` artworks with keys `1..=total`, titled "Artwork N".
    pub fn numbered(total: u64, page_size: u32) -> Self {
        let rows = (1..=total)
            .map(|id| Artwork::new(id, format!("Artwork {}", id)))
            .collect();
        Self::new(rows, page_size)
    }

    /// Make every fetch of `page` fail with `error`.
    pub fn fail_page(&self, page: u32, error: FetchError) {
        self.inner.lock().unwrap().failures.insert(page, error);
    }

    /// Delay responses for `page` by `delay`.
    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.inner.lock().unwrap().delays.insert(page, delay);
    }

    /// Replace the underlying rows, simulating a source that changed between
    /// fetches.
    pub fn replace_rows(&self, rows: Vec<Artwork>) {
        self.inner.lock().unwrap().rows = rows;
    }

    /// Page indices requested so far, in request order.
    pub fn fetched_pages(&self) -> Vec<u32> {
        self.inner.lock().unwrap().fetches.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.inner.lock().unwrap().fetches.len()
    }

    /// Highest number of fetches that were ever outstanding at once.
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn slice(&self, page_index: u32) -> FetchResult<Page> {
        let inner = self.inner.lock().unwrap();
        if let Some(err) = inner.failures.get(&page_index) {
            return Err(err.clone());
        }

        let size = self.page_size as usize;
        let start = (page_index as usize - 1).saturating_mul(size);
        let rows = inner
            .rows
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();
        Ok(Page::new(page_index, rows, inner.rows.len() as u64))
    }
}

#[async_trait]
impl PageSource for InMemorySource {
    async fn fetch(&self, page_index: u32) -> FetchResult<Page> {
        if page_index == 0 {
            return Err(FetchError::InvalidPage(page_index));
        }

        let delay = {
            let mut inner = self.inner.lock().unwrap();
            inner.fetches.push(page_index);
            inner.delays.get(&page_index).copied()
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = self.slice(page_index);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

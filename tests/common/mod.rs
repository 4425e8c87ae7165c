//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{settle, TestAppBuilder};
//!
//! let (mut app, source) = TestAppBuilder::new().with_rows(50).build();
//! settle(&mut app).await;
//! ```

pub mod fixtures;

pub use fixtures::*;

use artgrid::adapters::InMemorySource;
use artgrid::app::{App, AppMessage};
use std::sync::Arc;
use std::time::Duration;

/// Rows per page in apps built by [`TestAppBuilder`].
pub const PAGE_SIZE: u32 = 12;

/// Upper bound on how long a test waits for a spawned fetch.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for an [`App`] over an [`InMemorySource`].
pub struct TestAppBuilder {
    total: u64,
    start_page: Option<u32>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            total: 50,
            start_page: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows `1..=total` titled "Artwork N".
    pub fn with_rows(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Request this page as soon as the app is built.
    pub fn starting_at(mut self, page: u32) -> Self {
        self.start_page = Some(page);
        self
    }

    /// Pages hold [`PAGE_SIZE`] rows. Must be called inside a tokio runtime
    /// when a start page is set.
    pub fn build(self) -> (App, InMemorySource) {
        let source = InMemorySource::numbered(self.total, PAGE_SIZE);
        let mut app = App::new(Arc::new(source.clone()));
        if let Some(page) = self.start_page {
            app.on_page_change(page);
        }
        (app, source)
    }
}

/// Receive the next message for `app` without handling it.
pub async fn next_message(app: &mut App) -> AppMessage {
    let rx = app.message_rx.as_mut().expect("message receiver taken");
    tokio::time::timeout(MESSAGE_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for an app message")
        .expect("message channel closed")
}

/// Handle messages until no page load or bulk walk is in flight.
pub async fn settle(app: &mut App) {
    while app.pagination.is_loading_page() || app.pagination.is_bulk_selecting() {
        let msg = next_message(app).await;
        app.handle_message(msg);
    }
}

/// Handle messages until a page load completes (applied, failed or stale).
pub async fn settle_page(app: &mut App) {
    while app.pagination.is_loading_page() {
        let msg = next_message(app).await;
        app.handle_message(msg);
    }
}

//! Page navigation and bulk-selection dispatch.
//!
//! The controller owns the cursor and the rows of the displayed page. Every
//! network call runs in a spawned task that reports back through an
//! [`AppMessage`]; the UI task applies the result via
//! [`apply_page`](PaginationController::apply_page) or
//! [`finish_bulk`](PaginationController::finish_bulk).
//!
//! Page loads and bulk selections use separate request slots: navigating
//! while a bulk walk is running never cancels the walk, and the walk's
//! completion commits whichever page is on screen by then. A second bulk
//! request supersedes the first (latest wins).

use std::sync::Arc;
use tokio::sync::mpsc;

use super::token::{RequestSlot, RequestToken};
use super::PaginationCursor;
use crate::app::AppMessage;
use crate::error::{AccumulateError, FetchError, FetchResult};
use crate::models::{Artwork, Page, PageView};
use crate::selection::{accumulate_with_progress, SelectionState};
use crate::traits::PageSource;

/// What happened to a page response.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The page is now displayed
    Applied,
    /// A newer page request superseded this one; nothing changed
    Stale,
    /// The fetch failed; the previous rows stay on screen
    Failed(FetchError),
}

/// What happened to a bulk-selection completion.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome {
    /// The selection was replaced with `selected` rows (`requested` asked for)
    Committed { selected: usize, requested: i64 },
    /// A newer bulk request superseded this one; the selection is untouched
    Stale,
    /// The walk failed part-way; the selection is untouched
    Failed(AccumulateError),
}

pub struct PaginationController {
    source: Arc<dyn PageSource>,
    cursor: PaginationCursor,
    rows: Vec<Artwork>,
    /// Index of the page whose rows are on screen; the cursor falls back to
    /// it when a load fails
    shown_page: u32,
    page_slot: RequestSlot,
    bulk_slot: RequestSlot,
    bulk_progress: Option<(usize, usize)>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl PaginationController {
    pub fn new(source: Arc<dyn PageSource>, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let cursor = PaginationCursor::new(source.page_size());
        Self {
            source,
            shown_page: cursor.page_index,
            cursor,
            rows: Vec::new(),
            page_slot: RequestSlot::new(),
            bulk_slot: RequestSlot::new(),
            bulk_progress: None,
            message_tx,
        }
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    pub fn current_page(&self) -> PageView<'_> {
        PageView {
            rows: &self.rows,
            total_count: self.cursor.total_count,
            page_index: self.cursor.page_index,
        }
    }

    pub fn is_loading_page(&self) -> bool {
        self.page_slot.is_busy()
    }

    pub fn is_bulk_selecting(&self) -> bool {
        self.bulk_slot.is_busy()
    }

    /// `(rows_collected, target)` of the running bulk walk, once its first
    /// page is in.
    pub fn bulk_progress(&self) -> Option<(usize, usize)> {
        self.bulk_progress
    }

    /// Move the cursor to `page_index` and load it.
    ///
    /// Selection state is never touched. The index is clamped to the known
    /// page range. If the load fails the cursor returns to the page still on
    /// screen.
    pub fn change_page(&mut self, page_index: u32) -> RequestToken {
        let page_index = self.cursor.clamp_page(page_index);
        self.cursor.page_index = page_index;

        let token = self.page_slot.begin();
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();

        tracing::debug!(page = page_index, token = token.id(), "page change");
        let task = tokio::spawn(async move {
            let result = source.fetch(page_index).await;
            let _ = tx.send(AppMessage::PageLoaded { token, result });
        });
        self.page_slot.attach(task);
        token
    }

    pub fn reload(&mut self) -> RequestToken {
        self.change_page(self.cursor.page_index)
    }

    pub fn next_page(&mut self) -> Option<RequestToken> {
        if self.cursor.is_last() {
            return None;
        }
        Some(self.change_page(self.cursor.page_index.saturating_add(1)))
    }

    pub fn prev_page(&mut self) -> Option<RequestToken> {
        if self.cursor.is_first() {
            return None;
        }
        Some(self.change_page(self.cursor.page_index - 1))
    }

    pub fn first_page(&mut self) -> Option<RequestToken> {
        if self.cursor.is_first() {
            return None;
        }
        Some(self.change_page(1))
    }

    pub fn last_page(&mut self) -> Option<RequestToken> {
        match self.cursor.page_count() {
            0 => None,
            count if count == self.cursor.page_index => None,
            count => Some(self.change_page(count)),
        }
    }

    /// Apply a page response delivered by [`AppMessage::PageLoaded`].
    pub fn apply_page(&mut self, token: RequestToken, result: FetchResult<Page>) -> PageOutcome {
        if !self.page_slot.finish(token) {
            tracing::debug!(token = token.id(), "dropping stale page response");
            return PageOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.cursor.page_index = page.index;
                self.shown_page = page.index;
                self.cursor.total_count = page.total_count;
                self.rows = page.rows;
                PageOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    page = self.cursor.page_index,
                    shown = self.shown_page,
                    error = %e,
                    "page load failed"
                );
                self.cursor.page_index = self.shown_page;
                PageOutcome::Failed(e)
            }
        }
    }

    /// Select the first `count` rows starting at the displayed page.
    ///
    /// `count <= 0` is rejected before any fetch and returns `None`. Otherwise
    /// any bulk walk still in flight is cancelled and a new one starts from
    /// the current cursor; the cursor itself does not move.
    pub fn request_bulk_select(&mut self, count: i64) -> Option<RequestToken> {
        if count <= 0 {
            tracing::debug!(count, "ignoring non-positive bulk selection");
            return None;
        }

        let start_page = self.cursor.page_index;
        let token = self.bulk_slot.begin();
        self.bulk_progress = None;
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();

        tracing::info!(start_page, count, token = token.id(), "bulk selection requested");
        let task = tokio::spawn(async move {
            let progress_tx = tx.clone();
            let report = |collected: usize, target: usize| {
                let _ = progress_tx.send(AppMessage::BulkSelectProgress {
                    token,
                    collected,
                    target,
                });
            };
            let result = accumulate_with_progress(source.as_ref(), start_page, count, report).await;
            let _ = tx.send(AppMessage::BulkSelectFinished {
                token,
                requested: count,
                result,
            });
        });
        self.bulk_slot.attach(task);
        Some(token)
    }

    /// Record progress of the current bulk walk; stale reports are ignored.
    pub fn update_bulk_progress(
        &mut self,
        token: RequestToken,
        collected: usize,
        target: usize,
    ) -> bool {
        if !self.bulk_slot.is_current(token) {
            return false;
        }
        self.bulk_progress = Some((collected, target));
        true
    }

    /// Commit a finished bulk walk into `selection` (full replace).
    ///
    /// Applies regardless of which page is displayed now; only a superseded
    /// token is refused.
    pub fn finish_bulk(
        &mut self,
        token: RequestToken,
        requested: i64,
        result: Result<Vec<Artwork>, AccumulateError>,
        selection: &mut SelectionState,
    ) -> BulkOutcome {
        if !self.bulk_slot.finish(token) {
            tracing::debug!(token = token.id(), "dropping superseded bulk selection");
            return BulkOutcome::Stale;
        }
        self.bulk_progress = None;

        match result {
            Ok(rows) => {
                selection.replace_all(&rows);
                tracing::info!(selected = rows.len(), requested, "bulk selection committed");
                BulkOutcome::Committed {
                    selected: rows.len(),
                    requested,
                }
            }
            Err(e) => BulkOutcome::Failed(e),
        }
    }

    /// Abandon the running bulk walk, if any.
    pub fn cancel_bulk(&mut self) -> bool {
        let was_busy = self.bulk_slot.is_busy();
        self.bulk_slot.cancel();
        self.bulk_progress = None;
        was_busy
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("cursor", &self.cursor)
            .field("rows", &self.rows.len())
            .field("page_slot", &self.page_slot)
            .field("bulk_slot", &self.bulk_slot)
            .finish()
    }
}

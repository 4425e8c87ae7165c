//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages posted back by spawned fetch tasks
//! - [`Notice`] - The status-bar message
//!
//! `App` is the only thing the view talks to. It owns the pagination
//! controller, the selection set and the count prompt; all mutation happens
//! on the UI task.

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Notice, NoticeKind};

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::input::BulkCountInput;
use crate::models::{Artwork, PageView, RowKey};
use crate::pagination::{PaginationController, PaginationCursor};
use crate::selection::{PageSelection, SelectionState};
use crate::traits::PageSource;

/// Info notices disappear after this many ticks (about four seconds).
pub const NOTICE_TTL_TICKS: u64 = 250;

/// The count prompt's cursor flips visibility every this many ticks.
pub const CURSOR_BLINK_TICKS: u64 = 30;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the spinner and notice expiry
    pub tick_count: u64,
    /// Receiver for async messages; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Displayed page and in-flight requests
    pub pagination: PaginationController,
    /// Keys the user has selected, across pages
    pub selection: SelectionState,
    /// Row under the cursor, as an index into the displayed page
    pub focused_row: usize,
    /// The "select first N" prompt, when open
    pub count_input: Option<BulkCountInput>,
    /// Status-bar message
    pub notice: Option<Notice>,
}

impl App {
    /// Create an app reading pages from `source`. Nothing is fetched until
    /// the first [`on_page_change`](Self::on_page_change).
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let pagination = PaginationController::new(source, message_tx.clone());

        Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            pagination,
            selection: SelectionState::new(),
            focused_row: 0,
            count_input: None,
            notice: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation clock and expire stale info notices.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let busy = self.pagination.is_loading_page() || self.pagination.is_bulk_selecting();
        if busy {
            // Spinner frame changes
            self.mark_dirty();
        }
        if self.count_input.is_some() && self.tick_count % CURSOR_BLINK_TICKS == 0 {
            self.mark_dirty();
        }

        let tick = self.tick_count;
        let expired = matches!(
            &self.notice,
            Some(n) if !n.is_error() && tick.saturating_sub(n.raised_at) > NOTICE_TTL_TICKS
        );
        if expired {
            self.notice = None;
            self.mark_dirty();
        }
    }

    // =========================================================================
    // View facade
    // =========================================================================

    pub fn current_page(&self) -> PageView<'_> {
        self.pagination.current_page()
    }

    pub fn cursor(&self) -> &PaginationCursor {
        self.pagination.cursor()
    }

    pub fn selection(&self) -> &HashSet<RowKey> {
        self.selection.keys()
    }

    /// Navigate to `page_index`. The selection is left untouched.
    pub fn on_page_change(&mut self, page_index: u32) {
        self.pagination.change_page(page_index);
        self.mark_dirty();
    }

    /// Flip one visible row. Keys not on the displayed page are ignored.
    pub fn on_toggle_row(&mut self, key: RowKey) {
        if self.selection.toggle_row(key, self.pagination.rows()) {
            self.mark_dirty();
        }
    }

    /// Header checkbox.
    pub fn on_toggle_page(&mut self) {
        if self.pagination.rows().is_empty() {
            return;
        }
        self.selection.toggle_page(self.pagination.rows());
        self.mark_dirty();
    }

    /// Select the first `count` rows starting at the displayed page.
    /// Non-positive counts are ignored.
    pub fn on_bulk_select_request(&mut self, count: i64) {
        if self.pagination.request_bulk_select(count).is_some() {
            self.notice = Some(Notice::info(
                format!("Selecting {} rows…", count),
                self.tick_count,
            ));
            self.mark_dirty();
        }
    }

    pub fn on_clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.notice = Some(Notice::info("Selection cleared", self.tick_count));
            self.mark_dirty();
        }
    }

    pub fn on_cancel_bulk_select(&mut self) {
        if self.pagination.cancel_bulk() {
            self.notice = Some(Notice::info("Bulk selection cancelled", self.tick_count));
            self.mark_dirty();
        }
    }

    // =========================================================================
    // Row cursor
    // =========================================================================

    pub fn focused_artwork(&self) -> Option<&Artwork> {
        self.pagination.rows().get(self.focused_row)
    }

    pub fn move_focus_up(&mut self) {
        if self.focused_row > 0 {
            self.focused_row -= 1;
            self.mark_dirty();
        }
    }

    pub fn move_focus_down(&mut self) {
        if self.focused_row + 1 < self.pagination.rows().len() {
            self.focused_row += 1;
            self.mark_dirty();
        }
    }

    pub fn toggle_focused_row(&mut self) {
        if let Some(key) = self.focused_artwork().map(Artwork::key) {
            self.on_toggle_row(key);
        }
    }

    /// Header checkbox state for the displayed page.
    pub fn page_selection(&self) -> PageSelection {
        self.selection.page_state(self.pagination.rows())
    }

    pub fn is_selected(&self, key: RowKey) -> bool {
        self.selection.contains(key)
    }

    // =========================================================================
    // Count prompt
    // =========================================================================

    pub fn open_count_input(&mut self) {
        self.count_input = Some(BulkCountInput::new());
        self.mark_dirty();
    }

    pub fn close_count_input(&mut self) {
        self.count_input = None;
        self.mark_dirty();
    }

    /// Validate the prompt and start the bulk selection. An invalid entry
    /// keeps the prompt open with its error shown.
    pub fn submit_count_input(&mut self) {
        let Some(input) = self.count_input.as_mut() else {
            return;
        };
        match input.submit() {
            Ok(count) => {
                self.count_input = None;
                self.on_bulk_select_request(count);
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected bulk count");
            }
        }
        self.mark_dirty();
    }
}

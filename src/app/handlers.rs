//! Message handling for the App.

use super::{App, AppMessage, Notice};
use crate::pagination::{BulkOutcome, PageOutcome};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PageLoaded { token, result } => {
                match self.pagination.apply_page(token, result) {
                    PageOutcome::Applied => {
                        let rows = self.pagination.rows().len();
                        self.focused_row = self.focused_row.min(rows.saturating_sub(1));
                        if self.notice.as_ref().is_some_and(Notice::is_error) {
                            self.notice = None;
                        }
                    }
                    PageOutcome::Stale => return,
                    PageOutcome::Failed(e) => {
                        self.notice = Some(Notice::from_failure(
                            e.user_message(),
                            e.category(),
                            self.tick_count,
                        ));
                    }
                }
            }
            AppMessage::BulkSelectProgress {
                token,
                collected,
                target,
            } => {
                if !self.pagination.update_bulk_progress(token, collected, target) {
                    return;
                }
            }
            AppMessage::BulkSelectFinished {
                token,
                requested,
                result,
            } => {
                match self
                    .pagination
                    .finish_bulk(token, requested, result, &mut self.selection)
                {
                    BulkOutcome::Committed {
                        selected,
                        requested,
                    } => {
                        let text = if (selected as i64) < requested {
                            format!("Selected {} rows (only {} available)", selected, selected)
                        } else {
                            format!("Selected {} rows", selected)
                        };
                        self.notice = Some(Notice::info(text, self.tick_count));
                    }
                    BulkOutcome::Stale => return,
                    BulkOutcome::Failed(e) => {
                        tracing::warn!(
                            page = e.page,
                            collected = e.collected(),
                            error = %e.source,
                            "bulk selection failed"
                        );
                        self.notice = Some(Notice::from_failure(
                            format!(
                                "Bulk selection failed on page {}: {}",
                                e.page,
                                e.source.user_message()
                            ),
                            e.source.category(),
                            self.tick_count,
                        ));
                    }
                }
            }
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySource;
    use crate::error::{AccumulateError, FetchError, NetworkError};
    use crate::models::{Artwork, Page, RowKey};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_failed_page_sets_error_notice() {
        let source = InMemorySource::numbered(30, 12);
        let mut app = App::new(Arc::new(source));
        let token = app.pagination.change_page(2);
        app.needs_redraw = false;

        app.handle_message(AppMessage::PageLoaded {
            token,
            result: Err(FetchError::Network {
                page: 2,
                source: NetworkError::Timeout {
                    operation: "fetch page".into(),
                },
            }),
        });

        assert!(app.needs_redraw);
        let notice = app.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert!(notice.text.contains("press r to retry"));
    }

    #[tokio::test]
    async fn test_stale_messages_do_not_redraw() {
        let source = InMemorySource::numbered(30, 12);
        let mut app = App::new(Arc::new(source));
        let old = app.pagination.change_page(2);
        app.pagination.change_page(3);
        app.needs_redraw = false;

        app.handle_message(AppMessage::PageLoaded {
            token: old,
            result: Ok(Page::new(2, vec![Artwork::new(13, "x")], 30)),
        });

        assert!(!app.needs_redraw);
        assert!(app.current_page().rows.is_empty());
    }

    #[tokio::test]
    async fn test_failed_bulk_leaves_selection() {
        let source = InMemorySource::numbered(30, 12);
        let mut app = App::new(Arc::new(source));
        app.selection.replace_all(&[Artwork::new(5, "kept")]);
        let token = app.pagination.request_bulk_select(20).unwrap();

        app.handle_message(AppMessage::BulkSelectFinished {
            token,
            requested: 20,
            result: Err(AccumulateError {
                page: 2,
                rows: vec![Artwork::new(1, "a")],
                source: FetchError::Decode {
                    page: 2,
                    message: "truncated".into(),
                },
            }),
        });

        assert_eq!(app.selection().len(), 1);
        assert!(app.selection().contains(&RowKey(5)));
        assert!(app.notice.as_ref().unwrap().text.contains("page 2"));
        assert!(!app.pagination.is_bulk_selecting());
    }

    #[tokio::test]
    async fn test_partial_fulfilment_notice() {
        let source = InMemorySource::numbered(3, 12);
        let mut app = App::new(Arc::new(source));
        let token = app.pagination.request_bulk_select(10).unwrap();
        let rows: Vec<Artwork> = (1..=3).map(|i| Artwork::new(i, "r")).collect();

        app.handle_message(AppMessage::BulkSelectFinished {
            token,
            requested: 10,
            result: Ok(rows),
        });

        assert_eq!(app.selection().len(), 3);
        let notice = app.notice.as_ref().unwrap();
        assert!(!notice.is_error());
        assert!(notice.text.contains("only 3 available"));
    }
}

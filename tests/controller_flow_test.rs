//! Page changes and bulk selections racing each other through the App.

mod common;

use artgrid::app::AppMessage;
use artgrid::error::FetchError;
use artgrid::models::RowKey;
use artgrid::selection::PageSelection;
use artgrid::ui::paginator_text;
use common::{next_message, settle, settle_page, TestAppBuilder};
use std::time::Duration;

fn selected_ids(app: &artgrid::app::App) -> Vec<u64> {
    let mut ids: Vec<u64> = app.selection().iter().map(|k| k.0).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn test_page_change_keeps_selection() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;

    app.on_toggle_row(RowKey(3));
    app.on_page_change(2);
    settle(&mut app).await;
    app.on_toggle_row(RowKey(15));
    app.on_page_change(1);
    settle(&mut app).await;

    assert_eq!(selected_ids(&app), vec![3, 15]);
    assert_eq!(app.page_selection(), PageSelection::Partial);
}

#[tokio::test]
async fn test_bulk_select_replaces_selection() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    app.on_toggle_row(RowKey(7));

    app.on_bulk_select_request(20);
    settle(&mut app).await;

    assert_eq!(selected_ids(&app), (1..=20).collect::<Vec<_>>());
    // The initial load plus pages 1 and 2 for the walk
    assert_eq!(source.fetched_pages(), vec![1, 1, 2]);
    assert_eq!(app.current_page().page_index, 1);
}

#[tokio::test]
async fn test_bulk_select_from_later_page() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(3).build();
    settle(&mut app).await;

    app.on_bulk_select_request(5);
    settle(&mut app).await;

    assert_eq!(selected_ids(&app), vec![25, 26, 27, 28, 29]);
}

#[tokio::test]
async fn test_bulk_select_beyond_total() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;

    app.on_bulk_select_request(100);
    settle(&mut app).await;

    assert_eq!(app.selection().len(), 50);
    assert!(app.notice.as_ref().unwrap().text.contains("only 50 available"));
}

#[tokio::test]
async fn test_page_change_during_bulk_walk_does_not_cancel_it() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    source.delay_page(2, Duration::from_millis(50));

    app.on_bulk_select_request(20);
    app.on_page_change(4);
    settle(&mut app).await;

    assert_eq!(app.current_page().page_index, 4);
    assert_eq!(app.current_page().rows[0].id, RowKey(37));
    assert_eq!(selected_ids(&app), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_bulk_walk_finishing_before_page_change_still_commits() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    source.delay_page(4, Duration::from_millis(50));

    app.on_bulk_select_request(20);
    app.on_page_change(4);

    // The walk reports back before page 4 arrives
    while app.pagination.is_bulk_selecting() {
        let msg = next_message(&mut app).await;
        app.handle_message(msg);
    }
    assert!(app.pagination.is_loading_page());
    assert_eq!(selected_ids(&app), (1..=20).collect::<Vec<_>>());

    settle(&mut app).await;
    assert_eq!(app.current_page().page_index, 4);
    assert_eq!(app.current_page().rows[0].id, RowKey(37));
    assert_eq!(selected_ids(&app), (1..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_failed_page_load_returns_cursor_to_shown_page() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    source.fail_page(
        4,
        FetchError::Decode {
            page: 4,
            message: "bad json".into(),
        },
    );

    app.on_page_change(4);
    settle(&mut app).await;

    let view = app.current_page();
    assert_eq!(view.page_index, 1);
    assert_eq!(view.rows[0].id, RowKey(1));
    assert_eq!(paginator_text(&app), "Page 1 of 5 · rows 1-12 of 50");
    assert!(app.notice.as_ref().unwrap().is_error());

    // A bulk walk starts from the rows the user can see
    app.on_bulk_select_request(3);
    settle(&mut app).await;
    assert_eq!(selected_ids(&app), vec![1, 2, 3]);

    app.execute_command(artgrid::input::Command::NextPage);
    settle(&mut app).await;
    assert_eq!(app.current_page().page_index, 2);
}

#[tokio::test]
async fn test_second_bulk_request_supersedes_first() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    source.delay_page(2, Duration::from_millis(50));

    app.on_bulk_select_request(30);
    app.on_bulk_select_request(5);
    settle(&mut app).await;

    assert_eq!(selected_ids(&app), vec![1, 2, 3, 4, 5]);

    // The first walk was aborted and never reports back
    tokio::time::sleep(Duration::from_millis(100)).await;
    let rx = app.message_rx.as_mut().unwrap();
    assert!(rx.try_recv().is_err());
    assert_eq!(selected_ids(&app), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_stale_bulk_completion_is_dropped() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;

    app.on_bulk_select_request(3);
    let first = loop {
        match next_message(&mut app).await {
            msg @ AppMessage::BulkSelectFinished { .. } => break msg,
            other => app.handle_message(other),
        }
    };

    // A newer request is issued before the first completion is handled
    app.on_bulk_select_request(2);
    app.handle_message(first);
    assert!(app.selection().is_empty());

    settle(&mut app).await;
    assert_eq!(selected_ids(&app), vec![1, 2]);
}

#[tokio::test]
async fn test_out_of_order_page_responses() {
    let (mut app, source) = TestAppBuilder::new().build();
    source.delay_page(2, Duration::from_millis(50));

    app.on_page_change(2);
    app.on_page_change(3);
    settle_page(&mut app).await;
    assert_eq!(app.current_page().page_index, 3);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let rx = app.message_rx.as_mut().unwrap();
    assert!(rx.try_recv().is_err());
    assert_eq!(app.current_page().rows[0].id, RowKey(25));
}

#[tokio::test]
async fn test_failed_bulk_walk_leaves_selection_and_reports() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    app.on_toggle_row(RowKey(9));
    source.fail_page(
        2,
        FetchError::Decode {
            page: 2,
            message: "bad json".into(),
        },
    );

    app.on_bulk_select_request(20);
    settle(&mut app).await;

    assert_eq!(selected_ids(&app), vec![9]);
    let notice = app.notice.as_ref().unwrap();
    assert!(notice.is_error());
    assert!(notice.text.contains("page 2"));
}

#[tokio::test]
async fn test_bulk_progress_is_reported() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;

    app.on_bulk_select_request(30);
    let mut progress = Vec::new();
    while app.pagination.is_bulk_selecting() {
        let msg = next_message(&mut app).await;
        if let AppMessage::BulkSelectProgress {
            collected, target, ..
        } = &msg
        {
            progress.push((*collected, *target));
        }
        app.handle_message(msg);
    }

    assert_eq!(progress, vec![(12, 30), (24, 30), (30, 30)]);
    assert!(app.pagination.bulk_progress().is_none());
}

#[tokio::test]
async fn test_cancel_bulk_select() {
    let (mut app, source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;
    source.delay_page(1, Duration::from_millis(50));

    app.on_bulk_select_request(10);
    app.on_cancel_bulk_select();
    assert!(!app.pagination.is_bulk_selecting());

    tokio::time::sleep(Duration::from_millis(100)).await;
    let rx = app.message_rx.as_mut().unwrap();
    assert!(rx.try_recv().is_err());
    assert!(app.selection().is_empty());
}

#[tokio::test]
async fn test_toggle_page_header_checkbox() {
    let (mut app, _source) = TestAppBuilder::new().with_rows(14).starting_at(2).build();
    settle(&mut app).await;

    assert_eq!(app.page_selection(), PageSelection::None);
    app.on_toggle_page();
    assert_eq!(selected_ids(&app), vec![13, 14]);
    assert_eq!(app.page_selection(), PageSelection::All);
    app.on_toggle_page();
    assert!(app.selection().is_empty());
}

#[tokio::test]
async fn test_navigation_clamps_to_known_pages() {
    let (mut app, _source) = TestAppBuilder::new().starting_at(1).build();
    settle(&mut app).await;

    app.on_page_change(99);
    settle(&mut app).await;
    assert_eq!(app.current_page().page_index, 5);
    assert_eq!(app.current_page().rows.len(), 2);
}

//! Header line, paginator and keybind hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PROGRESS, COLOR_SELECTED,
};
use crate::app::{App, NoticeKind};

/// "artgrid" on the left, selection count on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " artgrid",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Art Institute of Chicago", Style::default().fg(COLOR_DIM)),
    ]));
    frame.render_widget(title, area);

    let count = Paragraph::new(Line::from(Span::styled(
        format!("{} selected ", app.selection().len()),
        Style::default().fg(COLOR_SELECTED),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(count, area);
}

/// Paginator text: `Page 2 of 5 · rows 13-24 of 50`.
pub fn paginator_text(app: &App) -> String {
    let cursor = app.cursor();
    let page = app.current_page();
    let pages = match cursor.page_count() {
        0 => "?".to_string(),
        n => n.to_string(),
    };
    match cursor.row_range(page.rows.len()) {
        Some((first, last)) => format!(
            "Page {} of {} · rows {}-{} of {}",
            cursor.page_index, pages, first, last, cursor.total_count
        ),
        None => format!("Page {} of {}", cursor.page_index, pages),
    }
}

/// Paginator on the left; activity or the current notice on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {}", paginator_text(app)),
        Style::default().fg(COLOR_ACCENT),
    )));
    frame.render_widget(left, area);

    let right = if let Some((collected, target)) = app.pagination.bulk_progress() {
        Span::styled(
            format!("{} Selecting {}/{} ", spinner_frame(app.tick_count), collected, target),
            Style::default().fg(COLOR_PROGRESS),
        )
    } else if app.pagination.is_bulk_selecting() {
        Span::styled(
            format!("{} Selecting… ", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_PROGRESS),
        )
    } else if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Info => COLOR_ACCENT,
            NoticeKind::Error => COLOR_ERROR,
        };
        Span::styled(format!("{} ", notice.text), Style::default().fg(color))
    } else if app.pagination.is_loading_page() {
        Span::styled(
            format!("{} Loading ", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_PROGRESS),
        )
    } else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        area,
    );
}

/// Keybind hints for the bottom line.
pub fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.count_input.is_some() {
        &[("Enter", "select"), ("Esc", "cancel")]
    } else {
        &[
            ("←/→", "page"),
            ("↑/↓", "row"),
            ("Space", "toggle"),
            ("a", "page toggle"),
            ("s", "select first N"),
            ("c", "clear"),
            ("r", "reload"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

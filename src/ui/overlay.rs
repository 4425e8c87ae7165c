//! The "select first N rows" prompt.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
};
use crate::app::{App, CURSOR_BLINK_TICKS};

pub fn render_count_input(frame: &mut Frame, app: &App) {
    let Some(input) = &app.count_input else {
        return;
    };

    let dialog_area = centered_rect(frame.area(), 44, 7);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Select rows ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let cursor = if app.tick_count / CURSOR_BLINK_TICKS % 2 == 0 { "▏" } else { " " };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Select the first N rows from page {}", app.cursor().page_index),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("N: ", Style::default().fg(COLOR_DIM)),
            Span::styled(input.value().to_string(), Style::default().fg(COLOR_ACCENT)),
            Span::styled(cursor, Style::default().fg(COLOR_ACCENT)),
        ]),
    ];
    if let Some(error) = input.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}

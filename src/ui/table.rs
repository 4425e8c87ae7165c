//! The artwork grid: checkbox column plus one column per field.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::helpers::{single_line, spinner_frame, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED,
};
use crate::app::App;
use crate::models::Artwork;
use crate::selection::PageSelection;

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";
pub const PARTIAL: &str = "[-]";

const COLUMN_TITLES: [&str; 6] = [
    "Title",
    "Origin",
    "Artist",
    "Inscriptions",
    "Start",
    "End",
];

/// Column widths after the checkbox. Text columns share what is left.
const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Percentage(24),
    Constraint::Percentage(14),
    Constraint::Percentage(24),
    Constraint::Percentage(24),
    Constraint::Length(6),
    Constraint::Length(6),
];

pub fn header_glyph(state: PageSelection) -> &'static str {
    match state {
        PageSelection::None => UNCHECKED,
        PageSelection::Partial => PARTIAL,
        PageSelection::All => CHECKED,
    }
}

/// Render the grid for the displayed page.
pub fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let page = app.current_page();
    if page.rows.is_empty() {
        let text = if app.pagination.is_loading_page() {
            format!("{} Loading page {}…", spinner_frame(app.tick_count), page.page_index)
        } else {
            "No artworks on this page.".to_string()
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Borders plus the checkbox column and spacing
    let text_width = (area.width as usize).saturating_sub(2 + 4 + 12 + 6);

    let header_style = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let mut header_cells = vec![Cell::from(header_glyph(app.page_selection()))];
    header_cells.extend(COLUMN_TITLES.iter().map(|t| Cell::from(*t)));
    let header = Row::new(header_cells).style(header_style).bottom_margin(1);

    let rows = page
        .rows
        .iter()
        .map(|artwork| artwork_row(artwork, app.is_selected(artwork.key()), text_width));

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(COLOR_CURSOR_BG).fg(COLOR_ACCENT));

    let mut state = TableState::default().with_selected(Some(app.focused_row));
    frame.render_stateful_widget(table, area, &mut state);
}

fn artwork_row(artwork: &Artwork, selected: bool, text_width: usize) -> Row<'static> {
    // Percentage columns; truncate to roughly a quarter of the text width
    let wide = text_width * 24 / 86;
    let narrow = text_width * 14 / 86;
    let (start, end) = artwork.year_span();

    let checkbox = if selected {
        Cell::from(Span::styled(CHECKED, Style::default().fg(COLOR_SELECTED)))
    } else {
        Cell::from(Span::styled(UNCHECKED, Style::default().fg(COLOR_DIM)))
    };

    Row::new(vec![
        checkbox,
        Cell::from(truncate_to_width(&single_line(&artwork.title), wide)),
        Cell::from(truncate_to_width(&single_line(&artwork.place_of_origin), narrow)),
        Cell::from(truncate_to_width(&single_line(&artwork.artist_display), wide)),
        Cell::from(truncate_to_width(&single_line(&artwork.inscriptions), wide)),
        Cell::from(start),
        Cell::from(end),
    ])
}

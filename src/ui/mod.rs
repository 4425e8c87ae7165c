//! UI rendering for artgrid
//!
//! One screen: a header line, the artwork table, the paginator/status line
//! and keybind hints, with the count prompt drawn on top when open.

mod helpers;
mod overlay;
mod status_bar;
mod table;
mod theme;

pub use helpers::truncate_to_width;
pub use status_bar::paginator_text;
pub use table::{header_glyph, CHECKED, PARTIAL, UNCHECKED};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use overlay::render_count_input;
use status_bar::{render_header, render_hints, render_status_bar};
use table::render_table;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, status, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    render_table(frame, body, app);
    render_status_bar(frame, status, app);
    render_hints(frame, hints, app);

    render_count_input(frame, app);
}

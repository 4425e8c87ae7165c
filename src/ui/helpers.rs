//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick (advances every 4 ticks).
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// Truncate `s` to at most `max_width` display columns, ending in `…` when
/// anything was cut. Wide characters are never split.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Collapse newlines and runs of whitespace so multi-line fields fit a cell.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Water Lilies", 20), "Water Lilies");
        assert_eq!(truncate_to_width("Water Lilies", 6), "Water…");
        assert_eq!(truncate_to_width("Water", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each ideograph is two columns wide
        assert_eq!(truncate_to_width("富嶽三十六景", 5), "富嶽…");
        assert_eq!(truncate_to_width("富嶽三十六景", 5).width(), 5);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Signed\nlower right:  \"C.M.\""), "Signed lower right: \"C.M.\"");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 6);
        assert_eq!(rect, Rect::new(20, 9, 40, 6));

        let small = centered_rect(Rect::new(0, 0, 20, 5), 40, 6);
        assert_eq!(small.width, 16);
        assert_eq!(small.height, 3);
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(40), SPINNER_FRAMES[0]);
    }
}

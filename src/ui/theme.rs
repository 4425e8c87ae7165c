//! Color theme constants for the artgrid UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the focused row
pub const COLOR_CURSOR_BG: Color = Color::Rgb(30, 34, 48);

// ============================================================================
// Selection & Status Colors
// ============================================================================

/// Checked checkbox and selection counter
pub const COLOR_SELECTED: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Spinner and progress text
pub const COLOR_PROGRESS: Color = Color::Cyan;

/// Error notices
pub const COLOR_ERROR: Color = Color::Red;

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

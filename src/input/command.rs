//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects on the
//! [`App`](crate::app::App).

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,

    // =========================================================================
    // Grid navigation
    // =========================================================================
    /// Move the row cursor up
    MoveUp,
    /// Move the row cursor down
    MoveDown,
    /// Next page (Right, PageDown, n)
    NextPage,
    /// Previous page (Left, PageUp, p)
    PrevPage,
    /// First page (Home)
    FirstPage,
    /// Last page (End)
    LastPage,
    /// Re-fetch the displayed page (r)
    Reload,

    // =========================================================================
    // Selection
    // =========================================================================
    /// Toggle the row under the cursor (Space)
    ToggleRow,
    /// Header checkbox: select or deselect the whole page (a)
    TogglePage,
    /// Drop every selected key (c)
    ClearSelection,
    /// Open the "select first N rows" prompt (s)
    OpenCountInput,
    /// Abandon a running bulk selection (Esc)
    CancelBulkSelect,

    // =========================================================================
    // Count prompt
    // =========================================================================
    /// Type a character into the prompt
    CountInputChar(char),
    /// Delete the last character
    CountInputBackspace,
    /// Validate and start the bulk selection
    CountInputSubmit,
    /// Close the prompt without selecting
    CountInputCancel,

    /// Key has no effect in the current context
    Noop,
}

impl Command {
    /// Whether executing this command changes anything on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_dirty() {
        assert!(Command::ToggleRow.marks_dirty());
        assert!(Command::CountInputChar('4').marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }
}

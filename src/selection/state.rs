//! Selection state management
//!
//! Holds the set of selected row keys. Rows are compared by key only: every
//! page load produces fresh `Artwork` instances, so structural or reference
//! equality would forget selections as soon as the user paginates.

use std::collections::HashSet;

use crate::models::{Artwork, RowKey};

/// How much of the visible page is selected, for the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSelection {
    #[default]
    None,
    Partial,
    All,
}

/// The selected-row set and the operations allowed on it.
///
/// Mutated only through [`toggle_row`](Self::toggle_row),
/// [`toggle_page`](Self::toggle_page), [`replace_all`](Self::replace_all)
/// and [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: HashSet<RowKey>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` if absent, remove it if present.
    ///
    /// Only rows on the visible page can be toggled; for any other key this
    /// is a no-op and returns `false`.
    pub fn toggle_row(&mut self, key: RowKey, visible: &[Artwork]) -> bool {
        if !visible.iter().any(|row| row.id == key) {
            return false;
        }

        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
        true
    }

    /// Header checkbox: select every visible row, or deselect them all if
    /// they are already all selected. Selections on other pages are kept.
    pub fn toggle_page(&mut self, visible: &[Artwork]) {
        if visible.is_empty() {
            return;
        }

        if self.page_state(visible) == PageSelection::All {
            for row in visible {
                self.selected.remove(&row.id);
            }
        } else {
            self.selected.extend(visible.iter().map(|row| row.id));
        }
    }

    /// Replace the whole selection with `rows`' keys.
    ///
    /// Reserved for bulk-selection completion.
    pub fn replace_all(&mut self, rows: &[Artwork]) {
        self.selected = rows.iter().map(|row| row.id).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn page_state(&self, visible: &[Artwork]) -> PageSelection {
        let selected = visible
            .iter()
            .filter(|row| self.selected.contains(&row.id))
            .count();

        match selected {
            0 => PageSelection::None,
            n if n == visible.len() => PageSelection::All,
            _ => PageSelection::Partial,
        }
    }

    pub fn contains(&self, key: RowKey) -> bool {
        self.selected.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn keys(&self) -> &HashSet<RowKey> {
        &self.selected
    }
}

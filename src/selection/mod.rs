//! Row selection
//!
//! - [`SelectionState`]: the selected-key set and its toggle / replace / clear
//!   operations
//! - [`accumulate`]: the cross-page walk behind "select the first N rows
//!   from here"
//!
//! # Usage
//!
//! ```ignore
//! use artgrid::selection::{accumulate, SelectionState};
//!
//! let rows = accumulate(&source, current_page, 20).await?;
//! let mut selection = SelectionState::new();
//! selection.replace_all(&rows);
//! ```

mod accumulator;
mod state;

pub use accumulator::{accumulate, accumulate_with_progress};
pub use state::{PageSelection, SelectionState};

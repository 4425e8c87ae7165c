//! Pagination: the cursor, the controller that moves it, and the request
//! tokens that keep late responses from overwriting newer state.

mod controller;
mod cursor;
mod token;

pub use controller::{BulkOutcome, PageOutcome, PaginationController};
pub use cursor::PaginationCursor;
pub use token::{RequestSlot, RequestToken};

//! AppMessage enum for async communication within the application.

use crate::error::{AccumulateError, FetchResult};
use crate::models::{Artwork, Page};
use crate::pagination::RequestToken;

/// Results posted back to the UI task by spawned fetch tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page fetch finished
    PageLoaded {
        token: RequestToken,
        result: FetchResult<Page>,
    },
    /// A bulk walk fetched another page
    BulkSelectProgress {
        token: RequestToken,
        collected: usize,
        target: usize,
    },
    /// A bulk walk finished or failed
    BulkSelectFinished {
        token: RequestToken,
        requested: i64,
        result: Result<Vec<Artwork>, AccumulateError>,
    },
}

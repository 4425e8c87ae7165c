use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_nullable_string, deserialize_row_key};

/// Identity of a row. Selection membership is decided by key alone, since the
/// same artwork is a fresh instance every time a page is re-fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowKey(pub u64);

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One artwork record as displayed in the table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Artwork {
    #[serde(deserialize_with = "deserialize_row_key")]
    pub id: RowKey,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub inscriptions: String,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Create an artwork with only a key and title; remaining fields empty.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: RowKey(id),
            title: title.into(),
            place_of_origin: String::new(),
            artist_display: String::new(),
            inscriptions: String::new(),
            date_start: None,
            date_end: None,
        }
    }

    pub fn key(&self) -> RowKey {
        self.id
    }

    /// Year range for display, `-` for missing bounds.
    pub fn year_span(&self) -> (String, String) {
        let fmt_year = |year: Option<i32>| {
            year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
        };
        (fmt_year(self.date_start), fmt_year(self.date_end))
    }
}

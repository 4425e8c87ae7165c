use super::Artwork;

/// A single fetched page: its 1-based index, rows in source order, and the
/// total row count the source reported when the page was served.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: u32,
    pub rows: Vec<Artwork>,
    pub total_count: u64,
}

impl Page {
    pub fn new(index: u32, rows: Vec<Artwork>, total_count: u64) -> Self {
        Self {
            index,
            rows,
            total_count,
        }
    }

    /// An empty page, which callers treat as the end of the source.
    pub fn empty(index: u32) -> Self {
        Self::new(index, Vec::new(), 0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// What the view renders for the table body and paginator.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub rows: &'a [Artwork],
    pub total_count: u64,
    pub page_index: u32,
}

/// The page currently displayed and the last total the source reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    /// 1-based index of the displayed page
    pub page_index: u32,
    /// Total record count from the most recent page response
    pub total_count: u64,
    /// Rows per page, for page-count math
    pub page_size: u32,
}

impl PaginationCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 1,
            total_count: 0,
            page_size: page_size.max(1),
        }
    }

    /// Number of pages implied by the last known total. Zero until a page
    /// has been loaded.
    pub fn page_count(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Clamp a requested page into `1..=page_count`, or just `>= 1` while the
    /// total is unknown.
    pub fn clamp_page(&self, page_index: u32) -> u32 {
        let page_index = page_index.max(1);
        match self.page_count() {
            0 => page_index,
            count => page_index.min(count),
        }
    }

    pub fn is_first(&self) -> bool {
        self.page_index <= 1
    }

    pub fn is_last(&self) -> bool {
        let count = self.page_count();
        count > 0 && self.page_index >= count
    }

    /// 1-based row numbers shown on the current page, for the paginator.
    pub fn row_range(&self, rows_on_page: usize) -> Option<(u64, u64)> {
        if rows_on_page == 0 {
            return None;
        }
        let first = u64::from(self.page_index - 1) * u64::from(self.page_size) + 1;
        Some((first, first + rows_on_page as u64 - 1))
    }
}

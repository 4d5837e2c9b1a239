//! Paged query results

use paging_system::Page;
use serde::Serialize;

/// Rows of one page together with the page that produced them
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    /// The consumed page, or `None` when the query ran unpaged
    pub page: Option<Page>,
}

impl<T> PageResult<T> {
    pub fn new(rows: Vec<T>, page: Option<Page>) -> Self {
        Self { rows, page }
    }

    pub fn total_record(&self) -> Option<i64> {
        self.page.as_ref().and_then(Page::total_record)
    }

    pub fn total_pages(&self) -> Option<i64> {
        self.page.as_ref().and_then(Page::total_pages)
    }

    pub fn is_paged(&self) -> bool {
        self.page.is_some()
    }
}

//! Page descriptor
//!
//! A `Page` describes which slice of a result set a caller wants and whether
//! the total number of matching rows should be computed alongside it.

use crate::errors::PagingError;
use serde::{Deserialize, Serialize};

/// Per-request pagination descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    page_no: u32,
    page_size: u32,
    need_total_record: bool,
    total_record: Option<i64>,
}

/// Unchecked wire form, validated through `Page::new`
#[derive(Deserialize)]
struct RawPage {
    page_no: u32,
    page_size: u32,
    #[serde(default)]
    need_total_record: bool,
    #[serde(default)]
    total_record: Option<i64>,
}

impl TryFrom<RawPage> for Page {
    type Error = PagingError;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        let mut page = Page::new(raw.page_no, raw.page_size)?.with_total_record(raw.need_total_record);
        page.total_record = raw.total_record;
        Ok(page)
    }
}

impl Page {
    /// Create a page descriptor. Both `page_no` (1-based) and `page_size` must be positive.
    pub fn new(page_no: u32, page_size: u32) -> Result<Self, PagingError> {
        if page_no == 0 {
            return Err(PagingError::InvalidPage(
                "page_no must be greater than 0".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(PagingError::InvalidPage(
                "page_size must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            page_no,
            page_size,
            need_total_record: false,
            total_record: None,
        })
    }

    /// Request the total record count to be computed before the page query runs
    pub fn with_total_record(mut self, need_total_record: bool) -> Self {
        self.need_total_record = need_total_record;
        self
    }

    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn need_total_record(&self) -> bool {
        self.need_total_record
    }

    /// Total number of matching rows, once counted
    pub fn total_record(&self) -> Option<i64> {
        self.total_record
    }

    pub fn set_total_record(&mut self, total_record: i64) {
        self.total_record = Some(total_record);
    }

    /// Number of rows skipped before this page: `(page_no - 1) * page_size`
    pub fn offset(&self) -> u64 {
        (u64::from(self.page_no) - 1) * u64::from(self.page_size)
    }

    /// Row number of the last row on this page: `page_no * page_size`
    pub fn end(&self) -> u64 {
        u64::from(self.page_no) * u64::from(self.page_size)
    }

    /// Number of pages needed to hold `total_record` rows
    pub fn total_pages(&self) -> Option<i64> {
        let size = i64::from(self.page_size);
        self.total_record
            .map(|total| if total <= 0 { 0 } else { (total + size - 1) / size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values_are_rejected() {
        assert!(matches!(Page::new(0, 10), Err(PagingError::InvalidPage(_))));
        assert!(matches!(Page::new(1, 0), Err(PagingError::InvalidPage(_))));
    }

    #[test]
    fn test_offsets() {
        let first = Page::new(1, 20).unwrap();
        assert_eq!(first.offset(), 0);
        assert_eq!(first.end(), 20);

        let third = Page::new(3, 15).unwrap();
        assert_eq!(third.offset(), 30);
        assert_eq!(third.end(), 45);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let page = Page::new(u32::MAX, u32::MAX).unwrap();
        let max = u64::from(u32::MAX);
        assert_eq!(page.end(), max * max);
        assert_eq!(page.offset(), (max - 1) * max);
        assert!(page.end() > i64::MAX as u64);
    }

    #[test]
    fn test_deserialize_validates() {
        let page: Page =
            serde_json::from_str(r#"{"page_no":3,"page_size":10,"need_total_record":true}"#)
                .unwrap();
        assert_eq!(page.offset(), 20);
        assert!(page.need_total_record());
        assert_eq!(page.total_record(), None);

        assert!(serde_json::from_str::<Page>(r#"{"page_no":0,"page_size":10}"#).is_err());
        assert!(serde_json::from_str::<Page>(r#"{"page_no":1,"page_size":0}"#).is_err());
    }

    #[test]
    fn test_serialized_page_reads_back() {
        let mut page = Page::new(2, 5).unwrap().with_total_record(true);
        page.set_total_record(12);

        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(serde_json::from_str::<Page>(&json).unwrap(), page);
    }

    #[test]
    fn test_total_pages() {
        let mut page = Page::new(1, 10).unwrap().with_total_record(true);
        assert!(page.need_total_record());
        assert_eq!(page.total_pages(), None);

        page.set_total_record(0);
        assert_eq!(page.total_pages(), Some(0));

        page.set_total_record(10);
        assert_eq!(page.total_pages(), Some(1));

        page.set_total_record(11);
        assert_eq!(page.total_pages(), Some(2));
    }
}

//! Page requests and paginated results.

use plant_catalog_core::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::Serialize;

/// A 1-based page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Lenient constructor: a missing or non-positive page becomes 1, a missing
    /// or non-positive size becomes `default_size`, and sizes are capped at
    /// [`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn new(page: Option<i64>, page_size: Option<i64>, default_size: u32) -> Self {
        let page = page.filter(|p| *p >= 1).map_or(1, |p| u32::try_from(p).unwrap_or(u32::MAX));
        let default_size = if default_size == 0 { DEFAULT_PAGE_SIZE } else { default_size };
        let page_size = page_size
            .filter(|s| *s >= 1)
            .map_or(default_size, |s| u32::try_from(s).unwrap_or(u32::MAX))
            .min(MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    /// Number of rows before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    /// Total number of records across all pages.
    pub total: u64,
    /// At least 1, even when there are no records.
    pub num_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of records plus its pagination metadata.
///
/// A page past the end is not an error: `data` is empty and `has_next` is false.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        let size = u64::from(request.page_size.max(1));
        let num_pages = total.div_ceil(size).max(1);
        let page = u64::from(request.page);
        Self {
            data,
            pagination: PageMeta {
                page: request.page,
                page_size: request.page_size,
                total,
                num_pages,
                has_next: page < num_pages,
                has_previous: page > 1,
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page { data: self.data.into_iter().map(f).collect(), pagination: self.pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_defaults() {
        assert_eq!(PageRequest::new(None, None, 10), PageRequest { page: 1, page_size: 10 });
        assert_eq!(PageRequest::new(Some(0), Some(-3), 10), PageRequest { page: 1, page_size: 10 });
        assert_eq!(PageRequest::new(Some(-7), Some(0), 0).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_size_is_capped() {
        assert_eq!(PageRequest::new(Some(2), Some(5000), 10).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(None, None, 500).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(3), Some(10), 10).offset(), 20);
        assert_eq!(PageRequest::new(Some(i64::MAX), Some(100), 10).offset(), (u64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn meta_for_middle_page() {
        let page = Page::new(vec![1, 2, 3], 23, PageRequest::new(Some(2), Some(10), 10));
        assert_eq!(page.pagination.num_pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_previous);
    }

    #[test]
    fn meta_for_empty_store() {
        let page: Page<u8> = Page::new(Vec::new(), 0, PageRequest::default());
        assert_eq!(page.pagination.num_pages, 1);
        assert!(!page.pagination.has_next);
        assert!(!page.pagination.has_previous);
    }

    #[test]
    fn meta_past_the_end() {
        let page: Page<u8> = Page::new(Vec::new(), 5, PageRequest::new(Some(9), Some(10), 10));
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_previous);
        assert_eq!(page.pagination.total, 5);
    }
}

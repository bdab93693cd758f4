//! Pagination
//!
//! Page arithmetic for the results table. One page size drives both the
//! slicing and the page count.

use crate::config::PAGE_SIZE;

/// Number of pages needed for `len` records
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Current page over an ordered record list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    records: Vec<T>,
    current_page: usize,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> PageState<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records, current_page: 1 }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        page_count(self.records.len())
    }

    /// Last valid page; 1 for an empty list
    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    /// Swap in a new record list, keeping the current page if still in range
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    /// Rows of the current page
    pub fn visible(&self) -> &[T] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.records.len());
        &self.records[start..end]
    }

    pub fn next(&mut self) {
        if self.current_page < self.last_page() {
            self.current_page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn last(&mut self) {
        self.current_page = self.last_page();
    }

    /// Jump straight to `page`, clamped into range
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.last_page());
    }

    /// Page controls are pointless for a single page
    pub fn shows_controls(&self) -> bool {
        self.page_count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(n: usize) -> PageState<usize> {
        PageState::new((0..n).collect())
    }

    #[test]
    fn test_page_count_matches_slicing() {
        for n in 0..=23 {
            let mut s = state(n);
            let pages = s.page_count();
            assert_eq!(pages, n.div_ceil(5));

            let mut seen = 0;
            for page in 1..=pages {
                s.go_to(page);
                let rows = s.visible().len();
                assert_eq!(rows, PAGE_SIZE.min(n - seen));
                seen += rows;
            }
            assert_eq!(seen, n);
        }
    }

    #[test]
    fn test_prev_on_first_page_stays() {
        let mut s = state(12);
        s.prev();
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn test_next_on_last_page_stays() {
        let mut s = state(12);
        s.last();
        assert_eq!(s.current_page(), 3);
        s.next();
        assert_eq!(s.current_page(), 3);
        assert_eq!(s.visible(), &[10, 11]);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut s = state(12);
        s.go_to(2);
        assert_eq!(s.visible(), &[5, 6, 7, 8, 9]);
        s.go_to(99);
        assert_eq!(s.current_page(), 3);
        s.go_to(0);
        assert_eq!(s.current_page(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut s = state(0);
        assert_eq!(s.page_count(), 0);
        assert!(s.visible().is_empty());
        s.next();
        assert_eq!(s.current_page(), 1);
        assert!(!s.shows_controls());
    }

    #[test]
    fn test_set_records_clamps_current_page() {
        let mut s = state(20);
        s.last();
        assert_eq!(s.current_page(), 4);
        s.set_records((0..7).collect());
        assert_eq!(s.current_page(), 2);
        assert_eq!(s.visible(), &[5, 6]);
    }

    #[test]
    fn test_controls_only_for_multiple_pages() {
        assert!(!state(5).shows_controls());
        assert!(state(6).shows_controls());
    }
}

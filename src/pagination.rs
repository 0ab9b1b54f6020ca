//! Page arithmetic for the recipe list.
//!
//! Everything here is a pure function of the page number and the total
//! count reported by the API, so the list page and the browser session
//! share one definition of "next", "previous" and "which links to show".

/// Recipes per list page (two rows of three cards).
pub const PAGE_SIZE: u32 = 6;

/// Cards per grid row.
pub const ROW_SIZE: usize = 3;

/// Maximum number of page-number links shown in the pagination bar.
/// Pages past this are reachable with next/previous only.
pub const MAX_PAGE_LINKS: u32 = 10;

/// Zero-based offset of the first recipe on `page`.
///
/// Widened to `u64` so every `u32` page number has an exact offset.
pub fn offset(page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE)
}

/// Number of pages needed to show `total` recipes.
pub fn total_pages(total: u32) -> u32 {
    total.div_ceil(PAGE_SIZE)
}

/// Pagination state of the list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current,
            total_pages: total_pages(total),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Target of the "previous" control, `None` while it is disabled.
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    /// Target of the "next" control, `None` while it is disabled.
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    /// Page numbers shown as direct links.
    pub fn links(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages.min(MAX_PAGE_LINKS)
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.current == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 6);
        assert_eq!(offset(5), 24);
    }

    #[test]
    fn test_offset_of_huge_page() {
        assert_eq!(offset(800_000_000), 4_799_999_994);
        assert_eq!(offset(u32::MAX), (u64::from(u32::MAX) - 1) * 6);
    }

    #[test]
    fn test_last_possible_page_has_no_next() {
        let pagination = Pagination::new(u32::MAX, 12);
        assert_eq!(pagination.next(), None);
        assert_eq!(pagination.previous(), Some(u32::MAX - 1));
    }

    #[test]
    fn test_previous_disabled_only_on_first_page() {
        let first = Pagination::new(1, 50);
        assert!(!first.has_previous());
        assert_eq!(first.previous(), None);

        let second = Pagination::new(2, 50);
        assert!(second.has_previous());
        assert_eq!(second.previous(), Some(1));
    }

    #[test]
    fn test_next_disabled_only_on_last_page() {
        let last = Pagination::new(9, 50);
        assert_eq!(last.total_pages, 9);
        assert!(!last.has_next());
        assert_eq!(last.next(), None);

        let before_last = Pagination::new(8, 50);
        assert!(before_last.has_next());
        assert_eq!(before_last.next(), Some(9));
    }

    #[test]
    fn test_single_page_disables_both() {
        let only = Pagination::new(1, 4);
        assert!(!only.has_previous());
        assert!(!only.has_next());
    }

    #[test]
    fn test_no_results_has_no_next() {
        let empty = Pagination::new(1, 0);
        assert!(!empty.has_next());
        assert_eq!(empty.links().count(), 0);
    }

    #[test]
    fn test_links_capped_at_ten() {
        let many = Pagination::new(1, 50 * PAGE_SIZE);
        assert_eq!(many.total_pages, 50);
        assert_eq!(many.links().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());

        let few = Pagination::new(1, 20);
        assert_eq!(few.links().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}

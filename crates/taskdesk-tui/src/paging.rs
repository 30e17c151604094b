/*
[INPUT]:  Server-confirmed page results and navigation requests
[OUTPUT]: Clamped page position and the visible page-number window
[POS]:    Review workflow - pagination controller
[UPDATE]: When window size or clamping rules change
*/

use taskdesk_client::TaskPage;

/// Maximum number of page buttons shown at once
const MAX_WINDOW: u32 = 5;

/// Pagination state for the task list.
///
/// `current_page` is 1-indexed. The requested `limit` is advisory: the
/// server-confirmed value from each page response overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_tasks: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(taskdesk_client::DEFAULT_PAGE_LIMIT)
    }
}

impl Pager {
    pub fn new(limit: u32) -> Self {
        Self {
            current_page: 1,
            limit: limit.max(1),
            total_pages: 1,
            total_tasks: 0,
        }
    }

    /// Move forward one page; clamped at the last page
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page; clamped at page 1
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a page, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    /// Return to page 1 (every filter change lands here)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Adjust the requested page size; takes effect on the next fetch
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
    }

    /// Adopt the server-confirmed page, limit, and page count
    pub fn apply(&mut self, page: &TaskPage) {
        self.limit = page.limit.max(1);
        self.total_pages = page.total_pages.max(1);
        self.total_tasks = page.total_tasks;
        self.set_page(self.current_page);
    }

    /// Fallback for a malformed page response: one empty page
    pub fn apply_invalid(&mut self) {
        self.total_pages = 1;
        self.current_page = 1;
        self.total_tasks = 0;
    }

    /// Visible page numbers: at most five, centered on the current page,
    /// clamped so the window never leaves `[1, total_pages]`.
    pub fn window(&self) -> Vec<u32> {
        let total = self.total_pages.max(1);
        let mut start = self.current_page.saturating_sub(MAX_WINDOW / 2).max(1);
        let end = (start + MAX_WINDOW - 1).min(total);
        if end - start + 1 < MAX_WINDOW {
            start = end.saturating_sub(MAX_WINDOW - 1).max(1);
        }
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(current_page: u32, total_pages: u32) -> Pager {
        Pager {
            current_page,
            limit: 5,
            total_pages,
            total_tasks: 0,
        }
    }

    #[test]
    fn window_is_centered_and_clamped_at_the_end() {
        assert_eq!(pager(10, 12).window(), vec![8, 9, 10, 11, 12]);
        assert_eq!(pager(12, 12).window(), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_shows_all_pages_when_few_exist() {
        assert_eq!(pager(1, 3).window(), vec![1, 2, 3]);
        assert_eq!(pager(1, 1).window(), vec![1]);
    }

    #[test]
    fn window_is_clamped_at_the_start() {
        assert_eq!(pager(1, 12).window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(pager(3, 12).window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(pager(4, 12).window(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut pager = pager(1, 2);
        assert!(!pager.previous());
        assert_eq!(pager.current_page, 1);

        assert!(pager.next());
        assert_eq!(pager.current_page, 2);
        assert!(!pager.next());
        assert_eq!(pager.current_page, 2);
    }

    #[test]
    fn set_page_clamps_into_range() {
        let mut pager = pager(1, 4);
        pager.set_page(9);
        assert_eq!(pager.current_page, 4);
        pager.set_page(0);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn apply_adopts_server_confirmed_limit_and_pages() {
        let mut pager = pager(5, 8);
        let page = TaskPage {
            page: 3,
            limit: 10,
            total_tasks: 23,
            total_pages: 3,
            data: Vec::new(),
        };

        pager.apply(&page);

        assert_eq!(pager.limit, 10);
        assert_eq!(pager.total_pages, 3);
        assert_eq!(pager.total_tasks, 23);
        // local page clamped once the server shrank the page count
        assert_eq!(pager.current_page, 3);
    }

    #[test]
    fn apply_invalid_resets_to_a_single_page() {
        let mut pager = pager(7, 9);
        pager.apply_invalid();
        assert_eq!(pager.total_pages, 1);
        assert_eq!(pager.current_page, 1);
    }
}

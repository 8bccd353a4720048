//! Fixed-size client-side pagination with a windowed button row.

/// Rows per page.
pub const PAGE_SIZE: usize = 20;
/// Page buttons shown at once; navigation beyond the window moves by
/// whole groups.
pub const PAGE_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager { current: 1 }
    }
}

impl Pager {
    pub fn new() -> Self {
        Pager::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(filtered_count: usize) -> usize {
        filtered_count.div_ceil(PAGE_SIZE).max(1)
    }

    /// Any filter mutation sends the view back to the first page.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Jumps to `page`, clamped to `1..=total`. Navigating past either
    /// bound is a no-op by construction.
    pub fn goto(&mut self, page: usize, total: usize) {
        self.current = page.clamp(1, total.max(1));
    }

    /// The slice of `items` visible on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * PAGE_SIZE;
        if start >= items.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }

    /// Inclusive `(start_page, end_page)` of the button window the
    /// current page belongs to.
    pub fn window(&self, total: usize) -> (usize, usize) {
        let group = (self.current - 1) / PAGE_WINDOW;
        let start = group * PAGE_WINDOW + 1;
        let end = (start + PAGE_WINDOW - 1).min(total);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one_and_ceils() {
        assert_eq!(Pager::total_pages(0), 1);
        assert_eq!(Pager::total_pages(1), 1);
        assert_eq!(Pager::total_pages(20), 1);
        assert_eq!(Pager::total_pages(21), 2);
        assert_eq!(Pager::total_pages(200), 10);
        assert_eq!(Pager::total_pages(201), 11);
    }

    #[test]
    fn navigation_clamps_at_both_bounds() {
        let total = Pager::total_pages(45); // 3 pages
        let mut pager = Pager::new();
        pager.goto(0, total);
        assert_eq!(pager.current(), 1);
        pager.goto(99, total);
        assert_eq!(pager.current(), 3);
        pager.goto(pager.current() + 1, total); // next at last page
        assert_eq!(pager.current(), 3);
        pager.reset();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn slice_matches_page_math() {
        let items: Vec<usize> = (0..45).collect();
        let total = Pager::total_pages(items.len());
        let mut pager = Pager::new();
        assert_eq!(pager.slice(&items).len(), 20);
        pager.goto(3, total);
        assert_eq!(pager.slice(&items), &items[40..45]);
        pager.goto(3, Pager::total_pages(0));
        assert_eq!(pager.current(), 1);
        assert!(pager.slice(&[] as &[usize]).is_empty());
    }

    #[test]
    fn window_moves_in_groups_of_ten() {
        let mut pager = Pager::new();
        assert_eq!(pager.window(23), (1, 10));
        pager.goto(10, 23);
        assert_eq!(pager.window(23), (1, 10));
        pager.goto(11, 23);
        assert_eq!(pager.window(23), (11, 20));
        pager.goto(21, 23);
        assert_eq!(pager.window(23), (21, 23));
        pager.goto(2, 3);
        assert_eq!(pager.window(3), (1, 3));
    }
}

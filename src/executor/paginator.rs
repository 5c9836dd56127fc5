//! Page slicing

use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows per page shown by the roster table
pub const ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Splits an ordered result into fixed-size, 1-based pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    items_per_page: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl Paginator {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self { items_per_page }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// `ceil(total / items_per_page)`; zero when there is nothing to show.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page())
    }

    /// Index range of `page` within a result of length `total`.
    ///
    /// Pages outside `1..=page_count(total)` yield an empty range.
    pub fn bounds(&self, page: usize, total: usize) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }
        let start = (page - 1)
            .saturating_mul(self.items_per_page())
            .min(total);
        let end = start.saturating_add(self.items_per_page()).min(total);
        start..end
    }

    /// Borrows the items of `page`
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        &items[self.bounds(page, items.len())]
    }
}

//! Pager button layout
//!
//! Shows at most three consecutive page numbers around the current page,
//! with the first and last page always reachable:
//!
//! ```text
//! page 5 of 10:  ‹ 1 … 4 [5] 6 … 10 ›
//! page 1 of 3:   ‹ [1] 2 3 ›
//! ```

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page { number: usize, current: bool },
    Gap,
}

/// The buttons a pager renders for one state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub items: Vec<PagerItem>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Lays out the pager for `current` of `page_count` pages.
    ///
    /// A single page (or none) needs no pager and yields an empty window.
    pub fn around(current: usize, page_count: usize) -> Self {
        if page_count <= 1 {
            return Self::default();
        }
        let current = current.clamp(1, page_count);

        let mut start = current.saturating_sub(1).max(1);
        let end = (start + MAX_VISIBLE - 1).min(page_count);
        if end - start < MAX_VISIBLE - 1 {
            start = end.saturating_sub(MAX_VISIBLE - 1).max(1);
        }

        let mut items = Vec::with_capacity(MAX_VISIBLE + 4);
        if start > 1 {
            items.push(PagerItem::Page {
                number: 1,
                current: current == 1,
            });
            if start > 2 {
                items.push(PagerItem::Gap);
            }
        }
        for number in start..=end {
            items.push(PagerItem::Page {
                number,
                current: number == current,
            });
        }
        if end < page_count {
            if end < page_count - 1 {
                items.push(PagerItem::Gap);
            }
            items.push(PagerItem::Page {
                number: page_count,
                current: current == page_count,
            });
        }

        Self {
            items,
            prev_enabled: current > 1,
            next_enabled: current < page_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers with `None` for gaps
    pub fn numbers(&self) -> Vec<Option<usize>> {
        self.items
            .iter()
            .map(|item| match item {
                PagerItem::Page { number, .. } => Some(*number),
                PagerItem::Gap => None,
            })
            .collect()
    }
}

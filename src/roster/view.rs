//! Transient view state: search, sort and page. Never persisted.

use crate::executor::{Paginator, SearchFilter, SortDirection, SortField, SortSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    sort: SortSpec,
    current_page: usize,
    paginator: Paginator,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort: SortSpec::default(),
            current_page: 1,
            paginator: Paginator::default(),
        }
    }
}

impl ViewState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_field(&self) -> SortField {
        self.sort.field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    /// At least 1, and never past the page count once the store has
    /// applied a mutation.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.paginator.items_per_page()
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    pub fn filter(&self) -> SearchFilter {
        SearchFilter::new(&self.search_query)
    }

    pub(crate) fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
    }

    /// Same field flips direction; a new field starts ascending.
    pub(crate) fn set_sort(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortSpec::asc(field);
        }
        self.current_page = 1;
    }

    /// Caller checks `page` against the page count.
    pub(crate) fn set_page(&mut self, page: usize) {
        debug_assert!(page >= 1);
        self.current_page = page.max(1);
    }

    /// Pulls the current page back to the last page after the result set
    /// shrank.
    pub(crate) fn clamp_page(&mut self, page_count: usize) {
        self.current_page = self.current_page.min(page_count.max(1));
    }
}

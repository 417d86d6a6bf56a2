//! Search-then-paginate state for list views

use super::{visible_page_numbers, FuzzyMatcher, PageLink, Searchable};

/// A collection filtered by a text query and split into fixed-size pages.
///
/// Changing the query or the collection re-filters and returns to page 1.
/// `set_page` does not clamp; callers clamp against `total_pages` (or use
/// `next_page` / `previous_page`). Nothing here errors or panics.
#[derive(Debug, Clone)]
pub struct SearchAndPagination<T> {
    items: Vec<T>,
    keys: Vec<String>,
    page_size: usize,
    matcher: FuzzyMatcher,
    query: String,
    /// Indices into `items`, in display order
    filtered: Vec<usize>,
    current_page: usize,
}

impl<T: Searchable> SearchAndPagination<T> {
    /// Create the state for `items`, searching the given field keys.
    ///
    /// A page size of zero is treated as one.
    pub fn new<I, K>(items: Vec<T>, keys: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            keys: keys.into_iter().map(Into::into).collect(),
            page_size: page_size.max(1),
            matcher: FuzzyMatcher::default(),
            query: String::new(),
            filtered,
            current_page: 1,
        }
    }

    /// Use a matcher with a different tolerance
    pub fn with_matcher(mut self, matcher: FuzzyMatcher) -> Self {
        self.matcher = matcher;
        self.refilter();
        self
    }

    /// Replace the query, re-filter and go back to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Replace the collection, re-filter with the active query and go back to page 1
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
    }

    /// Jump to a page (1-indexed, not clamped)
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Advance one page, stopping at the last
    pub fn next_page(&mut self) {
        self.current_page = self.current_page.saturating_add(1).min(self.total_pages().max(1));
    }

    /// Go back one page, stopping at the first
    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The unfiltered collection
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items matching the query
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Matching items: input order for an empty query, best match first otherwise
    pub fn filtered_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.filtered.iter().map(move |&i| &self.items[i])
    }

    /// Number of pages; zero when nothing matches
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Items of the current page; empty when the page is out of range
    pub fn paginated_items(&self) -> Vec<&T> {
        let Some(start) = self
            .current_page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
        else {
            return Vec::new();
        };
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.items[i])
            .collect()
    }

    /// Whether there is more than one page worth of matches
    pub fn shows_pagination(&self) -> bool {
        self.filtered_count() > self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page-number bar around the current page
    pub fn visible_page_numbers(&self) -> Vec<PageLink> {
        visible_page_numbers(self.current_page, self.total_pages())
    }

    fn refilter(&mut self) {
        self.filtered = if self.query.trim().is_empty() {
            (0..self.items.len()).collect()
        } else {
            self.matcher
                .search(&self.items, &self.keys, &self.query)
                .into_iter()
                .map(|hit| hit.index)
                .collect()
        };
        self.current_page = 1;
    }
}

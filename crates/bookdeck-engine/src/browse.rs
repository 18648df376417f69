use bookdeck_types::{Book, BookFilter, BookId, Catalog};

use crate::filter::filter_books;

/// Books revealed per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Filter-and-paginate view model over an immutable catalog.
///
/// Holds the current match set (a subsequence of the catalog, in catalog
/// order) and a page cursor counting how many fixed-size pages have been
/// revealed. The match set is recomputed wholesale on every filter
/// application, never patched incrementally. State changes only through
/// [`Browser::apply_filter`] and [`Browser::advance_page`]; everything else
/// is a read.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    filter: BookFilter,
    matches: Vec<usize>,
    page: usize,
    page_size: usize,
}

impl Browser {
    /// Start with the whole catalog matched and one page revealed
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let matches = (0..catalog.len()).collect();
        Self {
            catalog,
            filter: BookFilter::all(),
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Recompute the match set for `filter` and reset the cursor to page 1.
    /// An empty result is a valid state, not an error.
    pub fn apply_filter(&mut self, filter: BookFilter) {
        self.matches = filter_books(self.catalog.books(), &filter);
        self.filter = filter;
        self.page = 1;
    }

    /// Reveal one more page. No-op once the whole match set is visible, so
    /// the cursor never runs past the data.
    pub fn advance_page(&mut self) {
        if self.remaining_count() > 0 {
            self.page += 1;
        }
    }

    /// The currently revealed prefix of the match set
    pub fn visible(&self) -> Vec<&Book> {
        let end = (self.page_size * self.page).min(self.matches.len());
        self.matches[..end]
            .iter()
            .map(|&index| &self.catalog.books()[index])
            .collect()
    }

    /// Matches not yet revealed
    pub fn remaining_count(&self) -> usize {
        self.matches.len().saturating_sub(self.page_size * self.page)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> &BookFilter {
        &self.filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Record lookup for the detail view
    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.catalog.book(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdeck_testing::numbered_catalog;

    #[test]
    fn page_size_is_clamped_to_one() {
        let browser = Browser::new(numbered_catalog(3), 0);
        assert_eq!(browser.page_size(), 1);
        assert_eq!(browser.visible().len(), 1);
    }

    #[test]
    fn initial_state_shows_first_page_of_full_catalog() {
        let browser = Browser::new(numbered_catalog(5), 2);
        assert_eq!(browser.page(), 1);
        assert_eq!(browser.match_count(), 5);
        assert_eq!(browser.visible().len(), 2);
        assert_eq!(browser.remaining_count(), 3);
    }
}

//! Page-number bar for paginated lists

use serde::Serialize;
use std::fmt;

/// Most consecutive page numbers shown at once
pub const MAX_PAGES_SHOWN: usize = 5;

/// One entry of the page-number bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLink {
    /// A clickable page number
    Page(usize),
    /// A compressed range of pages
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{}", n),
            PageLink::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page numbers to display around `current_page`.
///
/// Shows a window of up to five pages. Near the start the window is pushed
/// right to page five, near the end it is pulled left to end at the last
/// page. Page 1 and the last page are always reachable: they are added in
/// front of / after the window, with an ellipsis when pages are skipped.
pub fn visible_page_numbers(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let half = MAX_PAGES_SHOWN / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let mut end = current_page.saturating_add(half).min(total_pages);

    if current_page.saturating_sub(1) <= half {
        end = total_pages.min(MAX_PAGES_SHOWN);
    }
    if total_pages.saturating_sub(current_page) <= half {
        start = total_pages.saturating_sub(MAX_PAGES_SHOWN - 1).max(1);
    }

    let mut links = Vec::with_capacity(MAX_PAGES_SHOWN + 4);

    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start..=end).map(PageLink::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    fn render(links: &[PageLink]) -> String {
        links
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_first_page_of_ten() {
        assert_eq!(
            visible_page_numbers(1, 10),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page_of_ten() {
        assert_eq!(
            visible_page_numbers(10, 10),
            [Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_middle_page_of_ten() {
        assert_eq!(
            visible_page_numbers(5, 10),
            [
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_no_ellipsis_for_adjacent_edges() {
        // window 2..=6 starts right after page 1
        assert_eq!(render(&visible_page_numbers(4, 7)), "1 2 3 4 5 6 7");
        assert_eq!(render(&visible_page_numbers(4, 8)), "1 2 3 4 5 6 … 8");
        assert_eq!(render(&visible_page_numbers(6, 9)), "1 … 4 5 6 7 8 9");
    }

    #[test]
    fn test_few_pages() {
        assert_eq!(render(&visible_page_numbers(1, 1)), "1");
        assert_eq!(render(&visible_page_numbers(2, 3)), "1 2 3");
        assert_eq!(render(&visible_page_numbers(3, 5)), "1 2 3 4 5");
    }

    #[test]
    fn test_no_pages() {
        assert!(visible_page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_out_of_range_current_page() {
        assert_eq!(render(&visible_page_numbers(12, 10)), "1 … 6 7 8 9 10");
        assert_eq!(render(&visible_page_numbers(0, 10)), "1 2 3 4 5 … 10");
        assert_eq!(render(&visible_page_numbers(usize::MAX, 10)), "1 … 6 7 8 9 10");
    }

    #[test]
    fn test_display() {
        assert_eq!(Ellipsis.to_string(), "…");
        assert_eq!(Page(3).to_string(), "3");
    }
}

//! Derived page metadata for response envelopes

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::request::PageableVerbose;
use crate::sort::SortOrderView;

/// Pagination metrics and sort rules derived from a [`Page`]
///
/// Which fields are set depends on the request's [`PageableVerbose`] mode;
/// unset fields are left out when serialized.
///
/// # Example
///
/// ```rust
/// use pageable::{Page, PageVerbose, Pageable, PageableVerbose};
///
/// let current = Pageable::new(2, 20)?.config_verbose(Some(PageableVerbose::Page));
/// let page = Page::new(vec!["row"; 20], current, Some(95));
///
/// let verbose = PageVerbose::of(&page).unwrap();
/// assert_eq!(verbose.current_page, Some(2));
/// assert_eq!(verbose.total_pages, Some(5));
/// assert_eq!(verbose.has_next, Some(true));
/// assert!(verbose.sort.is_none());
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVerbose {
    /// Current page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
    /// Number of records on this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_size: Option<usize>,
    /// Requested page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_last: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_previous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
    /// Number of pages, when it can be told
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// Active sort rules in priority order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortOrderView>>,
}

impl PageVerbose {
    /// Metadata requested by `page.current().verbose()`, or `None` for
    /// [`PageableVerbose::None`]
    pub fn of<T>(page: &Page<T>) -> Option<Self> {
        let mut verbose = Self::default();
        match page.current().verbose() {
            PageableVerbose::None => return None,
            PageableVerbose::Page => verbose.fill_page(page),
            PageableVerbose::Sort => verbose.fill_sort(page),
            PageableVerbose::All => {
                verbose.fill_page(page);
                verbose.fill_sort(page);
            }
        }
        Some(verbose)
    }

    fn fill_page<T>(&mut self, page: &Page<T>) {
        let current = page.current();
        self.current_page = Some(current.page_number());
        self.current_size = Some(page.len());
        self.page_size = Some(current.page_size());
        self.is_first = Some(page.is_first());
        self.is_last = Some(page.is_last());
        self.has_previous = Some(page.has_previous());
        self.has_next = Some(page.has_next());
        self.total_pages = page.total_pages();
    }

    fn fill_sort<T>(&mut self, page: &Page<T>) {
        self.sort = Some(
            page.current()
                .sort()
                .map(|sort| sort.to_views())
                .unwrap_or_default(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Pageable;
    use crate::sort::{Direction, Order};

    fn page_with(verbose: PageableVerbose, len: usize, total: Option<u64>) -> Page<usize> {
        let current = Pageable::builder()
            .page(3)
            .size(10)
            .verbose(verbose)
            .order(Order::desc("createdAt").unwrap())
            .order(Order::asc("id").unwrap())
            .build()
            .unwrap();
        Page::new((0..len).collect(), current, total)
    }

    #[test]
    fn test_none_yields_nothing() {
        assert!(PageVerbose::of(&page_with(PageableVerbose::None, 10, Some(100))).is_none());
    }

    #[test]
    fn test_page_mode_sets_metrics_only() {
        let verbose = PageVerbose::of(&page_with(PageableVerbose::Page, 10, Some(45))).unwrap();
        assert_eq!(verbose.current_page, Some(3));
        assert_eq!(verbose.current_size, Some(10));
        assert_eq!(verbose.page_size, Some(10));
        assert_eq!(verbose.is_first, Some(false));
        assert_eq!(verbose.is_last, Some(false));
        assert_eq!(verbose.has_previous, Some(true));
        assert_eq!(verbose.has_next, Some(true));
        assert_eq!(verbose.total_pages, Some(5));
        assert!(verbose.sort.is_none());
    }

    #[test]
    fn test_page_mode_without_total() {
        let verbose = PageVerbose::of(&page_with(PageableVerbose::Page, 10, None)).unwrap();
        assert_eq!(verbose.total_pages, None);
        assert_eq!(verbose.has_next, Some(true));

        let short = PageVerbose::of(&page_with(PageableVerbose::Page, 4, None)).unwrap();
        assert_eq!(short.total_pages, Some(3));
        assert_eq!(short.is_last, Some(true));
        assert_eq!(short.has_next, Some(false));
    }

    #[test]
    fn test_sort_mode_sets_sort_only() {
        let verbose = PageVerbose::of(&page_with(PageableVerbose::Sort, 10, Some(45))).unwrap();
        let sort = verbose.sort.clone().unwrap();
        assert_eq!(sort.len(), 2);
        assert_eq!(sort[0].property, "createdAt");
        assert_eq!(sort[0].direction, Direction::Desc);
        assert_eq!(sort[1].property, "id");
        assert_eq!(
            verbose,
            PageVerbose {
                sort: Some(sort),
                ..PageVerbose::default()
            }
        );
    }

    #[test]
    fn test_sort_mode_without_sort_is_empty_list() {
        let current = Pageable::builder().verbose(PageableVerbose::Sort).build().unwrap();
        let page: Page<u8> = Page::new(Vec::new(), current, Some(0));
        let verbose = PageVerbose::of(&page).unwrap();
        assert_eq!(verbose.sort, Some(Vec::new()));
    }

    #[test]
    fn test_all_mode_sets_both() {
        let verbose = PageVerbose::of(&page_with(PageableVerbose::All, 5, Some(25))).unwrap();
        assert_eq!(verbose.current_page, Some(3));
        assert_eq!(verbose.is_last, Some(true));
        assert_eq!(verbose.total_pages, Some(3));
        assert_eq!(verbose.sort.map(|sort| sort.len()), Some(2));
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let verbose = PageVerbose::of(&page_with(PageableVerbose::Sort, 10, None)).unwrap();
        let json = serde_json::to_value(&verbose).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sort": [
                    { "property": "createdAt", "direction": "DESC" },
                    { "property": "id", "direction": "ASC" }
                ]
            })
        );
    }
}

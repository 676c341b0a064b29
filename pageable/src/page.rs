//! Page responses and navigation
//!
//! A [`Page`] pairs the fetched records with the [`Pageable`] that produced
//! them and, when the data source counted them, the total number of records.
//! Navigation works with or without a total: without one, a short page is
//! taken as the last page and a full page is assumed to have a successor.
//!
//! # Example
//!
//! ```rust
//! use pageable::{Page, Pageable};
//!
//! let current = Pageable::new(5, 20)?;
//! let page = Page::new(vec![0_u32; 15], current, Some(95));
//!
//! assert_eq!(page.last_page_number(), Some(5));
//! assert!(page.is_last());
//! assert!(!page.has_next());
//! assert_eq!(page.next().page_number(), 5);
//! assert_eq!(page.previous().page_number(), 4);
//! # Ok::<(), pageable::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::request::{last_page_number, total_pages, Pageable};

/// Records of one page together with the request that fetched them
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    total: Option<u64>,
    current: Pageable,
}

impl<T> Page<T> {
    /// Wrap fetched records; `total` is `None` when no count was made
    pub fn new(content: Vec<T>, current: Pageable, total: Option<u64>) -> Self {
        Self {
            content,
            total,
            current,
        }
    }

    /// Assemble a page from pieces a data source may have left out
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `content` or `current` is missing.
    pub fn from_parts(
        content: Option<Vec<T>>,
        current: Option<Pageable>,
        total: Option<u64>,
    ) -> Result<Self> {
        let content = content.ok_or_else(|| Error::invalid_argument("Content must not be null!"))?;
        let current = current.ok_or_else(|| Error::invalid_argument("Pageable must not be null!"))?;
        Ok(Self::new(content, current, total))
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Total record count, if the data source counted
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// The request this page answers
    pub fn current(&self) -> &Pageable {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.content.iter()
    }

    fn is_full(&self) -> bool {
        let page_size = u64::from(self.current.page_size());
        u64::try_from(self.content.len()).is_ok_and(|len| len == page_size)
    }

    /// Number of pages, if it can be told
    ///
    /// Without a total, a short page means the current page is the last one.
    pub fn total_pages(&self) -> Option<u64> {
        match self.total {
            Some(total) => Some(total_pages(total, self.current.page_size())),
            None if !self.is_full() => {
                let before = self.current.page_number() - self.current.first_page_number();
                Some(u64::try_from(before).unwrap_or(0).saturating_add(1))
            }
            None => None,
        }
    }

    /// Number of the last page, if it can be told
    ///
    /// With a known total this counts from [`Pageable::first_page_number`]
    /// instead of returning `ceil(total / page_size)` as is, so zero-indexed
    /// requests get a reachable page number. A total of zero reports the
    /// first page rather than a page before it.
    pub fn last_page_number(&self) -> Option<i64> {
        match self.total {
            Some(total) => Some(last_page_number(
                self.current.first_page_number(),
                total_pages(total, self.current.page_size()),
            )),
            None if !self.is_full() => Some(self.current.page_number()),
            None => None,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current.page_number() == self.current.first_page_number()
    }

    pub fn is_last(&self) -> bool {
        match self.last_page_number() {
            Some(last) => self.current.page_number() == last,
            None => !self.is_full(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current.page_number() > self.current.first_page_number()
    }

    pub fn has_next(&self) -> bool {
        match self.last_page_number() {
            Some(last) => self.current.page_number() < last,
            None => self.is_full(),
        }
    }

    /// Request for the first page
    pub fn first(&self) -> Pageable {
        self.current.relocated(self.current.first_page_number())
    }

    /// Request for the previous page, or the first page when there is none
    pub fn previous(&self) -> Pageable {
        if self.has_previous() {
            self.current.relocated(self.current.page_number() - 1)
        } else {
            self.first()
        }
    }

    /// Request for the next page
    ///
    /// Never moves past a known last page. Without a total, a full page always
    /// leads to the following page since only fetching it can tell.
    pub fn next(&self) -> Pageable {
        if self.has_next() {
            return self.current.relocated(self.current.page_number().saturating_add(1));
        }
        match self.last() {
            Some(last) => last,
            None => self.current.relocated(self.current.page_number().saturating_add(1)),
        }
    }

    /// Request for the last page, or `None` while it cannot be told
    pub fn last(&self) -> Option<Pageable> {
        if !self.has_next() {
            return Some(self.current.clone());
        }
        self.last_page_number().map(|last| self.current.relocated(last))
    }

    /// Transform every record, keeping the total and the request
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::{Page, Pageable};
    ///
    /// let page = Page::new(vec![1, 2, 3], Pageable::new(1, 3)?, Some(9));
    /// let labels = page.map(|n| format!("#{n}"));
    /// assert_eq!(labels.content(), ["#1", "#2", "#3"]);
    /// assert_eq!(labels.total(), Some(9));
    /// # Ok::<(), pageable::Error>(())
    /// ```
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            current: self.current,
        }
    }

    /// Transform the whole record list at once, keeping the total and the request
    pub fn map_all<U, F>(self, f: F) -> Page<U>
    where
        F: FnOnce(Vec<T>) -> Vec<U>,
    {
        Page {
            content: f(self.content),
            total: self.total,
            current: self.current,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PageConfigKey;

    fn request(page: i64, size: i64) -> Pageable {
        Pageable::new(page, size).unwrap()
    }

    fn page_of(len: usize, current: Pageable, total: Option<u64>) -> Page<usize> {
        Page::new((0..len).collect(), current, total)
    }

    #[test]
    fn test_from_parts_requires_content_and_request() {
        assert!(matches!(
            Page::<u8>::from_parts(None, Some(request(1, 10)), Some(0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Page::from_parts(Some(vec![1]), None, None),
            Err(Error::InvalidArgument(_))
        ));
        let page = Page::from_parts(Some(vec![1, 2]), Some(request(1, 10)), None).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total(), None);
    }

    #[test]
    fn test_known_total_last_page() {
        let page = page_of(15, request(5, 20), Some(95));
        assert_eq!(page.last_page_number(), Some(5));
        assert_eq!(page.total_pages(), Some(5));
        assert!(page.is_last());
        assert!(!page.has_next());
        assert!(!page.is_first());
        assert!(page.has_previous());
    }

    #[test]
    fn test_known_total_first_page() {
        let page = page_of(20, request(1, 20), Some(95));
        assert!(page.is_first());
        assert!(!page.has_previous());
        assert!(!page.is_last());
        assert!(page.has_next());
        assert_eq!(page.next().page_number(), 2);
        assert_eq!(page.previous().page_number(), 1);
        assert_eq!(page.last().unwrap().page_number(), 5);
    }

    #[test]
    fn test_next_on_last_page_does_not_overshoot() {
        let page = page_of(15, request(5, 20), Some(95));
        let next = page.next();
        assert_eq!(next.page_number(), 5);
        assert_eq!(Some(next.page_number()), page.last_page_number());
        assert_eq!(page.last().unwrap(), *page.current());
    }

    #[test]
    fn test_unknown_total_full_page() {
        let page = page_of(20, request(3, 20), None);
        assert!(page.has_next());
        assert!(!page.is_last());
        assert_eq!(page.last_page_number(), None);
        assert_eq!(page.total_pages(), None);
        assert!(page.last().is_none());
        assert_eq!(page.next().page_number(), 4);
    }

    #[test]
    fn test_unknown_total_short_page() {
        let page = page_of(7, request(3, 20), None);
        assert!(!page.has_next());
        assert!(page.is_last());
        assert_eq!(page.last_page_number(), Some(3));
        assert_eq!(page.total_pages(), Some(3));
        assert_eq!(page.next().page_number(), 3);
        assert_eq!(page.last().unwrap().page_number(), 3);
    }

    #[test]
    fn test_empty_total() {
        let page = page_of(0, request(1, 20), Some(0));
        assert_eq!(page.total_pages(), Some(0));
        assert_eq!(page.last_page_number(), Some(1));
        assert!(page.is_first());
        assert!(page.is_last());
        assert!(!page.has_next());
        assert_eq!(page.next().page_number(), 1);
    }

    #[test]
    fn test_zero_indexed_navigation() {
        let current = request(1, 20).disable(PageConfigKey::PageNumberOneIndexed);
        let first = current.jump_to(0).unwrap();
        let page = page_of(20, first, Some(95));
        assert!(page.is_first());
        assert_eq!(page.last_page_number(), Some(4));
        assert_eq!(page.last().unwrap().page_number(), 4);
        assert_eq!(page.previous().page_number(), 0);

        let last = page_of(15, page.last().unwrap(), Some(95));
        assert!(last.is_last());
        assert!(!last.has_next());
    }

    #[test]
    fn test_navigation_keeps_configuration() {
        let current = request(2, 20).disable(PageConfigKey::NeedTotal);
        let page = page_of(20, current.clone(), None);
        let next = page.next();
        assert!(!next.need_total());
        assert_eq!(next.page_size(), 20);
        assert_eq!(page.first().page_number(), 1);
        assert_eq!(page.previous(), page.first());
        // navigation never touches the source request
        assert_eq!(page.current(), &current);
    }

    #[test]
    fn test_map_preserves_total_and_request() {
        let current = request(2, 3);
        let page = Page::new(vec![1, 2, 3], current.clone(), Some(10));
        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.content(), [2, 4, 6]);
        assert_eq!(doubled.total(), Some(10));
        assert_eq!(doubled.current(), &current);
    }

    #[test]
    fn test_map_all_transforms_whole_list() {
        let page = Page::new(vec!["b", "a"], request(1, 10), None);
        let sorted = page.map_all(|mut names| {
            names.sort_unstable();
            names.into_iter().map(String::from).collect()
        });
        assert_eq!(sorted.content(), ["a".to_string(), "b".to_string()]);
        assert_eq!(sorted.total(), None);
    }

    #[test]
    fn test_iteration() {
        let page = Page::new(vec![1, 2, 3], request(1, 10), Some(3));
        assert_eq!(page.iter().sum::<i32>(), 6);
        assert_eq!((&page).into_iter().count(), 3);
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}

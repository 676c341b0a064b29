//! Response envelope for paginated results
//!
//! # Example
//!
//! ```rust
//! use pageable::{Page, PageResponse, Pageable, PageableVerbose};
//!
//! let current = Pageable::new(1, 2)?.config_verbose(Some(PageableVerbose::Page));
//! let response = PageResponse::from(Page::new(vec!["a", "b"], current, Some(3)));
//!
//! assert_eq!(response.len(), 2);
//! assert_eq!(response.total, Some(3));
//! assert_eq!(response.verbose.unwrap().has_next, Some(true));
//! # Ok::<(), pageable::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::verbose::PageVerbose;

/// Records of one page with the total and the requested metadata
///
/// Drops the request itself so it can be handed to a transport layer as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The records
    pub content: Vec<T>,
    /// Total record count, if counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Metadata requested through the page's verbose mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<PageVerbose>,
}

impl<T> PageResponse<T> {
    /// Map each record to a new type
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            verbose: self.verbose,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let verbose = PageVerbose::of(&page);
        let total = page.total();
        Self {
            content: page.into_content(),
            total,
            verbose,
        }
    }
}

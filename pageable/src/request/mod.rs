//! Normalized page requests
//!
//! A [`Pageable`] is built once per request through a [`PageBuilder`] and is
//! immutable afterwards, with one exception: the `resort_property*` methods
//! rewrite the sort in place so data-access layers can narrow sort fields
//! without threading a new request through every call.
//!
//! Every other "modification" derives a new request:
//!
//! ```rust
//! use pageable::{PageConfigKey, Pageable};
//!
//! let pageable = Pageable::new(2, 25)?;
//! let next = pageable.jump_to(3)?;
//! let count_only = pageable.disable(PageConfigKey::NeedContent);
//!
//! assert_eq!(pageable.page_number(), 2);
//! assert_eq!(next.offset(), 50);
//! assert!(!count_only.need_content());
//! # Ok::<(), pageable::Error>(())
//! ```

mod builder;
mod options;

use std::borrow::Cow;

pub use builder::PageBuilder;
pub use options::{PageConfigKey, PageableVerbose};

use crate::config::first_page_number;
use crate::error::{Error, Result};
use crate::resort::SharedResortStrategy;
use crate::sort::{Order, Sort};

/// Page request: page number, page size, sort and request flags
///
/// Invariants after construction:
/// - `1 <= page_size <= max_page_size`
/// - `page_number >= first_page_number()`
#[derive(Debug, Clone, PartialEq)]
pub struct Pageable {
    page_number: i64,
    page_size: u32,
    default_page_size: u32,
    max_page_size: u32,
    need_total: bool,
    need_content: bool,
    fix_edge: bool,
    verbose: PageableVerbose,
    page_number_one_indexed: bool,
    resort_strategy: SharedResortStrategy,
    sort: Option<Sort>,
}

impl Pageable {
    /// Request `page_number` of size `page_size` with default settings
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageRequest`] if `page_number` is below the first page.
    pub fn new(page_number: i64, page_size: i64) -> Result<Self> {
        PageBuilder::new().page(page_number).size(page_size).build()
    }

    pub fn builder() -> PageBuilder {
        PageBuilder::new()
    }

    /// Builder pre-seeded with every field of this request
    pub fn to_builder(&self) -> PageBuilder {
        PageBuilder::from(self)
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Whether the data source should count the total
    pub fn need_total(&self) -> bool {
        self.need_total
    }

    /// Whether the data source should fetch the records
    pub fn need_content(&self) -> bool {
        self.need_content
    }

    pub fn is_fix_edge(&self) -> bool {
        self.fix_edge
    }

    pub fn verbose(&self) -> PageableVerbose {
        self.verbose
    }

    pub fn is_page_number_one_indexed(&self) -> bool {
        self.page_number_one_indexed
    }

    pub fn resort_strategy(&self) -> &SharedResortStrategy {
        &self.resort_strategy
    }

    /// `1` for one-indexed requests, `0` otherwise
    pub fn first_page_number(&self) -> i64 {
        first_page_number(self.page_number_one_indexed)
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        let pages_before = u64::try_from(self.page_number - self.first_page_number()).unwrap_or(0);
        pages_before.saturating_mul(u64::from(self.page_size))
    }

    /// Number of records to fetch
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// The sort as requested, without the resort strategy applied
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// The sort, rewritten through the configured strategy when `apply` is set
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::{Direction, Pageable, ResortStrategies};
    ///
    /// let pageable = Pageable::builder()
    ///     .sort_by(Direction::Asc, ["orderNo"])
    ///     .resort_strategy(ResortStrategies::SnakeCase)
    ///     .build()?;
    ///
    /// let raw = pageable.sort_with_strategy(false).unwrap();
    /// let resorted = pageable.sort_with_strategy(true).unwrap();
    /// assert_eq!(raw.to_query_strings(), vec!["orderNo,asc"]);
    /// assert_eq!(resorted.to_query_strings(), vec!["order_no,asc"]);
    /// # Ok::<(), pageable::Error>(())
    /// ```
    pub fn sort_with_strategy(&self, apply: bool) -> Option<Cow<'_, Sort>> {
        self.sort.as_ref().map(|sort| {
            if apply {
                Cow::Owned(sort.resort(&self.resort_strategy))
            } else {
                Cow::Borrowed(sort)
            }
        })
    }

    /// `property,direction` strings for every sort rule
    pub fn to_sort_query_strings(&self) -> Vec<String> {
        self.sort.as_ref().map(Sort::to_query_strings).unwrap_or_default()
    }

    /// Replace the rule on `property` with rules on `new_properties`, in place
    ///
    /// See [`Sort::resort_property`]. Needs exclusive access: a request shared
    /// between threads has to be wrapped in a lock, or derived with
    /// [`Pageable::jump_to`]-style methods instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `property` is sorted on and the
    /// replacement list is empty or contains a blank name. The sort is left
    /// untouched in that case.
    pub fn resort_property<I, P>(&mut self, property: &str, new_properties: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        if let Some(sort) = self.sort.as_ref() {
            let resorted = sort.resort_property(property, new_properties)?;
            self.replace_sort(resorted);
        }
        Ok(())
    }

    /// Replace the rule on `property` with the sort built by `handler`, in place
    pub fn resort_property_with<F>(&mut self, property: &str, handler: F)
    where
        F: FnOnce(&Order) -> Sort,
    {
        if let Some(sort) = self.sort.as_ref() {
            let resorted = sort.resort_property_with(property, handler);
            self.replace_sort(resorted);
        }
    }

    // an emptied sort means "unsorted"
    fn replace_sort(&mut self, sort: Sort) {
        self.sort = Some(sort).filter(|sort| !sort.is_empty());
    }

    /// Same request for another page
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageRequest`] if `page_number` is below the first page
    /// and edge fixing is off.
    pub fn jump_to(&self, page_number: i64) -> Result<Self> {
        let page_number =
            normalize_page_number(page_number, self.first_page_number(), self.fix_edge)?;
        Ok(Self {
            page_number,
            ..self.clone()
        })
    }

    /// Same request for another page, never below the first page
    pub(crate) fn relocated(&self, page_number: i64) -> Self {
        Self {
            page_number: page_number.max(self.first_page_number()),
            ..self.clone()
        }
    }

    /// Copy with one boolean switch set to `enabled`
    ///
    /// Switching to one-indexed pages moves page `0` to page `1`.
    #[must_use]
    pub fn config(&self, key: PageConfigKey, enabled: bool) -> Self {
        match key {
            PageConfigKey::NeedTotal => Self {
                need_total: enabled,
                ..self.clone()
            },
            PageConfigKey::NeedContent => Self {
                need_content: enabled,
                ..self.clone()
            },
            PageConfigKey::FixEdge => Self {
                fix_edge: enabled,
                ..self.clone()
            },
            PageConfigKey::PageNumberOneIndexed => Self {
                page_number_one_indexed: enabled,
                page_number: self.page_number.max(first_page_number(enabled)),
                ..self.clone()
            },
        }
    }

    #[must_use]
    pub fn enable(&self, key: PageConfigKey) -> Self {
        self.config(key, true)
    }

    #[must_use]
    pub fn disable(&self, key: PageConfigKey) -> Self {
        self.config(key, false)
    }

    /// Copy with another verbosity; `None` restores the default
    #[must_use]
    pub fn config_verbose(&self, verbose: Option<PageableVerbose>) -> Self {
        Self {
            verbose: verbose.unwrap_or_default(),
            ..self.clone()
        }
    }

    /// Copy with another resort strategy; `None` restores the default
    #[must_use]
    pub fn config_resort_strategy(&self, strategy: Option<SharedResortStrategy>) -> Self {
        Self {
            resort_strategy: strategy.unwrap_or_default(),
            ..self.clone()
        }
    }

    /// Move an overshooting request back onto the last page of `total`
    ///
    /// Only applies when edge fixing is on and the offset is past `total`;
    /// otherwise an unchanged copy is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Pageable;
    ///
    /// let pageable = Pageable::builder().page(9).size(20).fix_edge(true).build()?;
    /// assert_eq!(pageable.fix_edge(Some(95)).page_number(), 5);
    /// assert_eq!(pageable.fix_edge(None).page_number(), 9);
    /// # Ok::<(), pageable::Error>(())
    /// ```
    #[must_use]
    pub fn fix_edge(&self, total: Option<u64>) -> Self {
        match total {
            Some(total) if self.fix_edge && self.offset() > total => {
                let pages = total_pages(total, self.page_size);
                let last = last_page_number(self.first_page_number(), pages);
                tracing::debug!(
                    page = self.page_number,
                    last,
                    total,
                    "moving overshooting page request to the last page"
                );
                self.relocated(last)
            }
            _ => self.clone(),
        }
    }
}

pub(crate) fn normalize_page_number(requested: i64, first: i64, fix_edge: bool) -> Result<i64> {
    if requested >= first {
        return Ok(requested);
    }
    if fix_edge {
        tracing::debug!(requested, first, "raising page number to the first page");
        return Ok(first);
    }
    Err(Error::page_request(format!(
        "page number {} must not be less than {}",
        requested, first
    )))
}

/// Pages needed to hold `total` records
pub(crate) fn total_pages(total: u64, page_size: u32) -> u64 {
    total.div_ceil(u64::from(page_size.max(1)))
}

/// Last page number for `pages` pages; an empty result still has a first page
pub(crate) fn last_page_number(first: i64, pages: u64) -> i64 {
    let extra = i64::try_from(pages.saturating_sub(1)).unwrap_or(i64::MAX);
    first.saturating_add(extra)
}

//! Builder for [`Pageable`]

use super::options::PageableVerbose;
use super::{normalize_page_number, Pageable};
use crate::config::{first_page_number, PageDefaults};
use crate::error::{Error, Result};
use crate::resort::{ResortStrategy, SharedResortStrategy};
use crate::sort::{Direction, Order, Sort};

/// Collects typed request parameters and normalizes them into a [`Pageable`]
///
/// Nothing is validated until [`PageBuilder::build`], so setters can be
/// chained in any order.
///
/// # Example
///
/// ```rust
/// use pageable::{Direction, Pageable};
///
/// let pageable = Pageable::builder()
///     .page(3)
///     .size(50)
///     .sort_by(Direction::Desc, ["createdAt"])
///     .build()?;
///
/// assert_eq!(pageable.page_number(), 3);
/// assert_eq!(pageable.offset(), 100);
/// assert_eq!(pageable.to_sort_query_strings(), vec!["createdAt,desc"]);
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug)]
pub struct PageBuilder {
    page_number: Option<i64>,
    page_size: Option<i64>,
    default_page_size: u32,
    max_page_size: u32,
    need_total: bool,
    need_content: bool,
    fix_edge: bool,
    verbose: PageableVerbose,
    page_number_one_indexed: bool,
    resort_strategy: SharedResortStrategy,
    sort: Option<Sort>,
    sort_error: Option<Error>,
}

impl PageBuilder {
    /// Start from built-in defaults
    pub fn new() -> Self {
        Self::with_defaults(&PageDefaults::default())
    }

    /// Start from loaded defaults
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::{PageBuilder, PageDefaults};
    ///
    /// let defaults = PageDefaults {
    ///     page_size: 10,
    ///     page_number_one_indexed: false,
    ///     ..PageDefaults::default()
    /// };
    /// let pageable = PageBuilder::with_defaults(&defaults).build()?;
    /// assert_eq!(pageable.page_number(), 0);
    /// assert_eq!(pageable.page_size(), 10);
    /// # Ok::<(), pageable::Error>(())
    /// ```
    pub fn with_defaults(defaults: &PageDefaults) -> Self {
        Self {
            page_number: None,
            page_size: None,
            default_page_size: defaults.page_size,
            max_page_size: defaults.max_page_size,
            need_total: defaults.need_total,
            need_content: defaults.need_content,
            fix_edge: defaults.fix_edge,
            verbose: defaults.verbose,
            page_number_one_indexed: defaults.page_number_one_indexed,
            resort_strategy: defaults.resort_strategy.into(),
            sort: None,
            sort_error: None,
        }
    }

    /// Requested page number
    #[must_use]
    pub fn page(mut self, page_number: i64) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Request the first page, whatever the indexing ends up being
    #[must_use]
    pub fn first_page(mut self) -> Self {
        self.page_number = None;
        self
    }

    /// Requested page size; values below 1 fall back to the default size
    #[must_use]
    pub fn size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn default_page_size(mut self, default_page_size: u32) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    #[must_use]
    pub fn max_page_size(mut self, max_page_size: u32) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    #[must_use]
    pub fn need_total(mut self, need_total: bool) -> Self {
        self.need_total = need_total;
        self
    }

    #[must_use]
    pub fn need_content(mut self, need_content: bool) -> Self {
        self.need_content = need_content;
        self
    }

    /// Raise page numbers below the first page instead of failing
    #[must_use]
    pub fn fix_edge(mut self, fix_edge: bool) -> Self {
        self.fix_edge = fix_edge;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: PageableVerbose) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn page_number_one_indexed(mut self, page_number_one_indexed: bool) -> Self {
        self.page_number_one_indexed = page_number_one_indexed;
        self
    }

    /// Strategy applied by [`Pageable::sort_with_strategy`]
    #[must_use]
    pub fn resort_strategy<S>(self, strategy: S) -> Self
    where
        S: ResortStrategy + 'static,
    {
        self.shared_resort_strategy(SharedResortStrategy::new(strategy))
    }

    /// Reuse an already shared strategy handle
    #[must_use]
    pub fn shared_resort_strategy(mut self, strategy: SharedResortStrategy) -> Self {
        self.resort_strategy = strategy;
        self
    }

    /// Append one sort rule
    ///
    /// Rules on a property that is already sorted on are ignored, as are
    /// later duplicates within the appended rules.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.append_orders([order]);
        self
    }

    /// Append every rule of `sort`
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.append_orders(sort);
        self
    }

    /// Append rules sorting `properties` in `direction`
    ///
    /// A blank property makes [`PageBuilder::build`] fail.
    #[must_use]
    pub fn sort_by<I, P>(mut self, direction: Direction, properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut orders = Vec::new();
        for property in properties {
            match Order::new(direction, property) {
                Ok(order) => orders.push(order),
                Err(err) => {
                    if self.sort_error.is_none() {
                        self.sort_error = Some(err);
                    }
                }
            }
        }
        self.append_orders(orders);
        self
    }

    fn append_orders(&mut self, orders: impl IntoIterator<Item = Order>) {
        let current = self.sort.take().unwrap_or_default();
        let fresh: Sort = orders
            .into_iter()
            .filter(|order| current.find_order_for(order.property()).is_none())
            .collect();
        self.sort = Some(current.and(Some(&fresh)));
    }

    /// Validate and normalize into a [`Pageable`]
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when the default or max page size is
    ///   below 1, or a sort property is blank
    /// - [`Error::PageRequest`] when the page number is below the first page
    ///   and edge fixing is off
    pub fn build(self) -> Result<Pageable> {
        if self.default_page_size < 1 {
            return Err(Error::invalid_argument("default page size must be at least 1"));
        }
        if self.max_page_size < 1 {
            return Err(Error::invalid_argument("max page size must be at least 1"));
        }
        if let Some(err) = self.sort_error {
            return Err(err);
        }

        let page_size =
            normalize_page_size(self.page_size, self.default_page_size, self.max_page_size);
        let first = first_page_number(self.page_number_one_indexed);
        let page_number =
            normalize_page_number(self.page_number.unwrap_or(first), first, self.fix_edge)?;
        let sort = self.sort.filter(|sort| !sort.is_empty());

        Ok(Pageable {
            page_number,
            page_size,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            need_total: self.need_total,
            need_content: self.need_content,
            fix_edge: self.fix_edge,
            verbose: self.verbose,
            page_number_one_indexed: self.page_number_one_indexed,
            resort_strategy: self.resort_strategy,
            sort,
        })
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Pageable> for PageBuilder {
    fn from(pageable: &Pageable) -> Self {
        Self {
            page_number: Some(pageable.page_number),
            page_size: Some(i64::from(pageable.page_size)),
            default_page_size: pageable.default_page_size,
            max_page_size: pageable.max_page_size,
            need_total: pageable.need_total,
            need_content: pageable.need_content,
            fix_edge: pageable.fix_edge,
            verbose: pageable.verbose,
            page_number_one_indexed: pageable.page_number_one_indexed,
            resort_strategy: pageable.resort_strategy.clone(),
            sort: pageable.sort.clone(),
            sort_error: None,
        }
    }
}

fn normalize_page_size(
    requested: Option<i64>,
    default_page_size: u32,
    max_page_size: u32,
) -> u32 {
    match requested {
        Some(size) if size >= 1 => {
            if size > i64::from(max_page_size) {
                tracing::debug!(requested = size, max = max_page_size, "clamping page size");
                max_page_size
            } else {
                u32::try_from(size).unwrap_or(max_page_size)
            }
        }
        Some(size) => {
            tracing::debug!(
                requested = size,
                default = default_page_size,
                "using default page size"
            );
            default_page_size
        }
        None => default_page_size,
    }
}

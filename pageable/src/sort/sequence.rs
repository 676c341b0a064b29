//! Ordered, property-unique collections of [`Order`]

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::direction::Direction;
use super::order::{Order, SortOrderView};
use crate::error::{Error, Result};
use crate::resort::ResortStrategy;

/// Ordered sequence of sort rules, unique by property
///
/// Construction keeps the first [`Order`] seen for each property and drops
/// later duplicates silently. [`Sort::and`] is the one exception: it
/// concatenates without deduplicating, leaving conflicts to be resolved with
/// one of the `resort` methods.
///
/// # Example
///
/// ```rust
/// use pageable::{Direction, Order, Sort};
///
/// let sort = Sort::new(vec![
///     Order::desc("createdAt")?,
///     Order::asc("name")?,
///     Order::asc("createdAt")?,
/// ]);
/// assert_eq!(sort.len(), 2);
/// assert_eq!(sort.to_query_strings(), vec!["createdAt,desc", "name,asc"]);
///
/// let by_id = Sort::by(Direction::Asc, ["id"])?;
/// assert_eq!(sort.and(Some(&by_id)).len(), 3);
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    /// Create a sort from explicit orders, keeping the first order per property
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: dedup_by_property(orders),
        }
    }

    /// Create a sort applying one direction to several properties
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if no property is given or any
    /// property is blank.
    pub fn by<I, P>(direction: Direction, properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let orders = properties
            .into_iter()
            .map(|property| Order::new(direction, property))
            .collect::<Result<Vec<_>>>()?;
        if orders.is_empty() {
            return Err(Error::invalid_argument(
                "You have to provide at least one property to sort by!",
            ));
        }
        Ok(Self::new(orders))
    }

    /// Ascending sort over `properties`
    pub fn asc<I, P>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::by(Direction::Asc, properties)
    }

    /// Descending sort over `properties`
    pub fn desc<I, P>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::by(Direction::Desc, properties)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Concatenate `other`'s orders after this sort's
    ///
    /// Duplicate properties across the two sorts are kept.
    #[must_use]
    pub fn and(&self, other: Option<&Sort>) -> Sort {
        let Some(other) = other else {
            return self.clone();
        };
        let mut orders = Vec::with_capacity(self.orders.len() + other.orders.len());
        orders.extend(self.orders.iter().cloned());
        orders.extend(other.orders.iter().cloned());
        Sort { orders }
    }

    /// First order registered for `property`
    pub fn find_order_for(&self, property: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.property() == property)
    }

    /// Remove and return the first order registered for `property`
    ///
    /// The relative order of the remaining elements is preserved.
    pub fn remove_order_for(&mut self, property: &str) -> Option<Order> {
        let index = self
            .orders
            .iter()
            .position(|order| order.property() == property)?;
        Some(self.orders.remove(index))
    }

    /// Keep only the orders `keep` accepts, in their current order
    ///
    /// Duplicates left by [`Sort::and`] are not collapsed.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Order) -> bool,
    {
        self.orders.retain(keep);
    }

    /// Rewrite every order through `strategy`, then deduplicate again
    ///
    /// Two properties that collide after translation keep the first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::{ResortStrategies, Sort};
    ///
    /// let sort = Sort::asc(["orderNo", "createdAt"])?;
    /// let resorted = sort.resort(&ResortStrategies::SnakeCase);
    /// assert_eq!(resorted.to_query_strings(), vec!["order_no,asc", "created_at,asc"]);
    /// # Ok::<(), pageable::Error>(())
    /// ```
    #[must_use]
    pub fn resort<S>(&self, strategy: &S) -> Sort
    where
        S: ResortStrategy + ?Sized,
    {
        let resorted = Sort::new(self.orders.iter().cloned().map(|order| strategy.transfer(order)));
        tracing::trace!(before = %self, after = %resorted, "applied resort strategy");
        resorted
    }

    /// Swap the order on `property` for orders on `new_properties`
    ///
    /// The replacements keep the direction of the removed order and are
    /// appended at the end. A sort without `property` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `property` is present and the
    /// replacement list is empty or contains a blank name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Sort;
    ///
    /// let sort = Sort::desc(["fullName", "id"])?;
    /// let resorted = sort.resort_property("fullName", ["lastName", "firstName"])?;
    /// assert_eq!(
    ///     resorted.to_query_strings(),
    ///     vec!["id,desc", "lastName,desc", "firstName,desc"]
    /// );
    /// # Ok::<(), pageable::Error>(())
    /// ```
    pub fn resort_property<I, P>(&self, property: &str, new_properties: I) -> Result<Sort>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.try_resort_property_with(property, |order| {
            Sort::by(order.direction(), new_properties)
        })
    }

    /// Swap the order on `property` for the sort produced by `handler`
    ///
    /// `handler` receives the removed order; its result is appended via
    /// [`Sort::and`]. An empty result simply drops the property. A sort
    /// without `property` is returned unchanged and `handler` is not called.
    #[must_use]
    pub fn resort_property_with<F>(&self, property: &str, handler: F) -> Sort
    where
        F: FnOnce(&Order) -> Sort,
    {
        let mut remaining = self.clone();
        match remaining.remove_order_for(property) {
            Some(removed) => remaining.and(Some(&handler(&removed))),
            None => remaining,
        }
    }

    /// Fallible form of [`Sort::resort_property_with`]
    pub fn try_resort_property_with<F>(&self, property: &str, handler: F) -> Result<Sort>
    where
        F: FnOnce(&Order) -> Result<Sort>,
    {
        let mut remaining = self.clone();
        match remaining.remove_order_for(property) {
            Some(removed) => {
                let replacement = handler(&removed)?;
                Ok(remaining.and(Some(&replacement)))
            }
            None => Ok(remaining),
        }
    }

    /// Render every order as a `property,direction` query parameter value
    pub fn to_query_strings(&self) -> Vec<String> {
        self.orders.iter().map(Order::to_query_string).collect()
    }

    /// Serializable `{property, direction}` views of every order
    pub fn to_views(&self) -> Vec<SortOrderView> {
        self.orders.iter().map(SortOrderView::from).collect()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.orders.is_empty() {
            return write!(f, "UNSORTED");
        }
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", order)?;
        }
        Ok(())
    }
}

impl FromIterator<Order> for Sort {
    fn from_iter<T: IntoIterator<Item = Order>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl From<Order> for Sort {
    fn from(order: Order) -> Self {
        Self {
            orders: vec![order],
        }
    }
}

impl IntoIterator for Sort {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

fn dedup_by_property(orders: impl IntoIterator<Item = Order>) -> Vec<Order> {
    let mut seen = HashSet::new();
    orders
        .into_iter()
        .filter(|order| seen.insert(order.property().to_string()))
        .collect()
}

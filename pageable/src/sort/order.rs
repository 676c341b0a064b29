//! A single sort criterion

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::{Direction, NullHandling};
use crate::error::{Error, Result};

/// Pairing of a [`Direction`] and a property, with case and null handling hints
///
/// An `Order` is immutable: every modifier consumes it and returns a derived
/// copy. The property name is never blank.
///
/// # Example
///
/// ```rust
/// use pageable::{Direction, NullHandling, Order};
///
/// let order = Order::desc("createdAt")?.ignore_case().nulls_last();
/// assert_eq!(order.property(), "createdAt");
/// assert_eq!(order.direction(), Direction::Desc);
/// assert!(order.is_ignore_case());
/// assert_eq!(order.null_handling(), NullHandling::NullsLast);
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Order {
    direction: Direction,
    property: String,
    ignore_case: bool,
    null_handling: NullHandling,
}

impl Order {
    /// Create a case-sensitive order with native null handling
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `property` is empty or whitespace.
    pub fn new(direction: Direction, property: impl Into<String>) -> Result<Self> {
        Self::with_options(direction, property, false, NullHandling::Native)
    }

    /// Create an order with every attribute given explicitly
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `property` is empty or whitespace.
    pub fn with_options(
        direction: Direction,
        property: impl Into<String>,
        ignore_case: bool,
        null_handling: NullHandling,
    ) -> Result<Self> {
        let property = property.into();
        if property.trim().is_empty() {
            return Err(Error::invalid_argument(
                "Property must not be null or empty!",
            ));
        }
        Ok(Self {
            direction,
            property,
            ignore_case,
            null_handling,
        })
    }

    /// Ascending order on `property`
    pub fn asc(property: impl Into<String>) -> Result<Self> {
        Self::new(Direction::Asc, property)
    }

    /// Descending order on `property`
    pub fn desc(property: impl Into<String>) -> Result<Self> {
        Self::new(Direction::Desc, property)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn null_handling(&self) -> NullHandling {
        self.null_handling
    }

    /// Whether sorting for this property shall be ascending
    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    /// Copy with case-insensitive sorting enabled
    #[must_use]
    pub fn ignore_case(self) -> Self {
        Self {
            ignore_case: true,
            ..self
        }
    }

    /// Copy with the given property name
    ///
    /// A blank name leaves the order untouched, so a rename strategy can
    /// express "keep the current name" by handing back nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Order;
    ///
    /// let order = Order::asc("orderNo")?;
    /// assert_eq!(order.clone().with_property("order_no").property(), "order_no");
    /// assert_eq!(order.with_property("  ").property(), "orderNo");
    /// # Ok::<(), pageable::Error>(())
    /// ```
    #[must_use]
    pub fn with_property(self, property: impl Into<String>) -> Self {
        let property = property.into();
        if property.trim().is_empty() {
            return self;
        }
        Self { property, ..self }
    }

    /// Copy with the given [`NullHandling`]
    #[must_use]
    pub fn with_null_handling(self, null_handling: NullHandling) -> Self {
        Self {
            null_handling,
            ..self
        }
    }

    /// Copy with [`NullHandling::NullsFirst`]
    #[must_use]
    pub fn nulls_first(self) -> Self {
        self.with_null_handling(NullHandling::NullsFirst)
    }

    /// Copy with [`NullHandling::NullsLast`]
    #[must_use]
    pub fn nulls_last(self) -> Self {
        self.with_null_handling(NullHandling::NullsLast)
    }

    /// Copy with [`NullHandling::Native`]
    #[must_use]
    pub fn nulls_native(self) -> Self {
        self.with_null_handling(NullHandling::Native)
    }

    /// Render as a `property,direction` query parameter value
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Order;
    ///
    /// assert_eq!(Order::desc("name")?.to_query_string(), "name,desc");
    /// # Ok::<(), pageable::Error>(())
    /// ```
    pub fn to_query_string(&self) -> String {
        format!("{},{}", self.property, self.direction)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.direction.as_sql())?;
        if self.ignore_case {
            write!(f, ", ignoring case")?;
        }
        Ok(())
    }
}

/// Serializable `{property, direction}` projection of an [`Order`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrderView {
    /// Sorted property
    pub property: String,
    /// Sort direction (ASC or DESC)
    pub direction: Direction,
}

impl From<&Order> for SortOrderView {
    fn from(order: &Order) -> Self {
        Self {
            property: order.property.clone(),
            direction: order.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_order_rejects_blank_property() {
        for blank in ["", " ", "\t", "  \n "] {
            let err = Order::asc(blank).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "input {:?}", blank);
        }
    }

    #[test]
    fn test_order_round_trips_property() {
        for name in ["id", "orderNo", " padded ", "a.b.c", "名字"] {
            let order = Order::desc(name).unwrap();
            assert_eq!(order.property(), name);
        }
    }

    #[test]
    fn test_order_defaults() {
        let order = Order::asc("name").unwrap();
        assert_eq!(order.direction(), Direction::Asc);
        assert!(!order.is_ignore_case());
        assert_eq!(order.null_handling(), NullHandling::Native);
        assert!(order.is_ascending());
    }

    #[test]
    fn test_order_ignore_case_keeps_other_fields() {
        let order = Order::desc("name").unwrap().nulls_first().ignore_case();
        assert!(order.is_ignore_case());
        assert_eq!(order.direction(), Direction::Desc);
        assert_eq!(order.null_handling(), NullHandling::NullsFirst);
    }

    #[test]
    fn test_order_with_blank_property_is_noop() {
        let order = Order::desc("createdAt").unwrap().ignore_case();
        let same = order.clone().with_property("");
        assert_eq!(same, order);
    }

    #[test]
    fn test_order_with_property_keeps_flags() {
        let order = Order::desc("createdAt")
            .unwrap()
            .ignore_case()
            .nulls_last()
            .with_property("created_at");
        assert_eq!(order.property(), "created_at");
        assert_eq!(order.direction(), Direction::Desc);
        assert!(order.is_ignore_case());
        assert_eq!(order.null_handling(), NullHandling::NullsLast);
    }

    #[test]
    fn test_order_null_handling_variants() {
        let order = Order::asc("score").unwrap();
        assert_eq!(
            order.clone().nulls_first().null_handling(),
            NullHandling::NullsFirst
        );
        assert_eq!(
            order.clone().nulls_last().null_handling(),
            NullHandling::NullsLast
        );
        assert_eq!(
            order.nulls_last().nulls_native().null_handling(),
            NullHandling::Native
        );
    }

    #[test]
    fn test_order_query_string_and_display() {
        let order = Order::asc("name").unwrap();
        assert_eq!(order.to_query_string(), "name,asc");
        assert_eq!(order.to_string(), "name: ASC");
        assert_eq!(order.ignore_case().to_string(), "name: ASC, ignoring case");
    }

    #[test]
    fn test_sort_order_view_from_order() {
        let view = SortOrderView::from(&Order::desc("updatedAt").unwrap());
        assert_eq!(view.property, "updatedAt");
        assert_eq!(view.direction, Direction::Desc);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({ "property": "updatedAt", "direction": "DESC" })
        );
    }

    proptest! {
        /// Whitespace-only property names never build an order
        #[test]
        fn prop_blank_property_is_rejected(blank in "[ \t\r\n]{0,8}") {
            prop_assert!(matches!(Order::asc(blank.as_str()), Err(Error::InvalidArgument(_))));
            prop_assert!(Order::desc(blank).is_err());
        }

        /// Any other name is kept exactly as given
        #[test]
        fn prop_property_round_trips(
            property in "[ \t]{0,3}[A-Za-z0-9_.]{1,16}[ \t]{0,3}",
            descending in any::<bool>(),
        ) {
            let direction = if descending { Direction::Desc } else { Direction::Asc };
            let order = Order::new(direction, property.clone()).unwrap();
            prop_assert_eq!(order.property(), property.as_str());
            prop_assert_eq!(order.direction(), direction);
        }
    }
}

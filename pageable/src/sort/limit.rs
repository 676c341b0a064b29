//! Whitelisting of client-supplied sort rules

use serde::{Deserialize, Serialize};

use super::sequence::Sort;
use crate::error::{Error, Result};

/// Restricts which properties a caller may sort by
///
/// An empty `allowed` list accepts every property. With `required` set, a
/// request whose sort is empty after filtering is rejected.
///
/// # Example
///
/// ```rust
/// use pageable::{Sort, SortLimit};
///
/// let limit = SortLimit::new(["name", "createdAt"]);
/// let requested = Sort::asc(["name", "password"])?;
/// let filtered = limit.apply(Some(&requested))?.unwrap();
/// assert_eq!(filtered.to_query_strings(), vec!["name,asc"]);
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLimit {
    /// Properties callers may sort by
    #[serde(default)]
    pub allowed: Vec<String>,
    /// Whether at least one sort rule must remain
    #[serde(default)]
    pub required: bool,
}

impl SortLimit {
    /// Allow sorting by the given properties only
    pub fn new<I, P>(allowed: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            required: false,
        }
    }

    /// Require a non-empty sort after filtering
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether `property` passes this limit
    pub fn permits(&self, property: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|allowed| allowed == property)
    }

    /// Drop every order whose property is not allowed
    ///
    /// Returns `None` when nothing is left to sort by.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the limit is `required` and no
    /// allowed order remains.
    pub fn apply(&self, sort: Option<&Sort>) -> Result<Option<Sort>> {
        let mut filtered = sort.cloned().unwrap_or_default();
        filtered.retain(|order| {
            let permitted = self.permits(order.property());
            if !permitted {
                tracing::debug!(
                    property = order.property(),
                    "dropping sort on disallowed property"
                );
            }
            permitted
        });

        if filtered.is_empty() {
            if self.required {
                return Err(Error::invalid_argument("Sort parameter is required"));
            }
            return Ok(None);
        }
        Ok(Some(filtered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Order;

    #[test]
    fn test_empty_whitelist_allows_everything() {
        let limit = SortLimit::default();
        let sort = Sort::asc(["a", "b"]).unwrap();
        assert_eq!(limit.apply(Some(&sort)).unwrap(), Some(sort));
    }

    #[test]
    fn test_filters_disallowed_properties_in_order() {
        let limit = SortLimit::new(["c", "a"]);
        let sort = Sort::new(vec![
            Order::asc("a").unwrap(),
            Order::desc("b").unwrap(),
            Order::desc("c").unwrap(),
        ]);
        let filtered = limit.apply(Some(&sort)).unwrap().unwrap();
        assert_eq!(filtered.to_query_strings(), vec!["a,asc", "c,desc"]);
    }

    #[test]
    fn test_keeps_duplicates_from_combined_sorts() {
        let combined = Sort::asc(["b"]).unwrap().and(Some(&Sort::desc(["b", "z"]).unwrap()));

        let everything = SortLimit::default().apply(Some(&combined)).unwrap().unwrap();
        assert_eq!(everything.to_query_strings(), vec!["b,asc", "b,desc", "z,desc"]);

        let only_b = SortLimit::new(["b"]).apply(Some(&combined)).unwrap().unwrap();
        assert_eq!(only_b.to_query_strings(), vec!["b,asc", "b,desc"]);
    }

    #[test]
    fn test_nothing_left_returns_none() {
        let limit = SortLimit::new(["a"]);
        let sort = Sort::asc(["z"]).unwrap();
        assert_eq!(limit.apply(Some(&sort)).unwrap(), None);
        assert_eq!(limit.apply(None).unwrap(), None);
    }

    #[test]
    fn test_required_rejects_empty_result() {
        let limit = SortLimit::new(["a"]).required();
        assert!(matches!(limit.apply(None), Err(Error::InvalidArgument(_))));
        let sort = Sort::asc(["z"]).unwrap();
        assert!(limit.apply(Some(&sort)).is_err());
        let ok = Sort::asc(["a"]).unwrap();
        assert!(limit.apply(Some(&ok)).unwrap().is_some());
    }
}

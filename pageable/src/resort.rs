//! Rewrite strategies for sort properties
//!
//! A [`ResortStrategy`] maps one [`Order`] to another, typically to translate
//! client-facing field names into the names used by the storage layer. Any
//! `Fn(Order) -> Order` closure is a strategy; two named strategies ship
//! with the crate in [`ResortStrategies`].
//!
//! # Example
//!
//! ```rust
//! use pageable::{Order, ResortStrategies, ResortStrategy};
//!
//! let order = ResortStrategies::SnakeCase.transfer(Order::desc("createdAt")?);
//! assert_eq!(order.property(), "created_at");
//! # Ok::<(), pageable::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sort::Order;

/// Pure rewrite of a single sort rule
pub trait ResortStrategy: Send + Sync {
    /// Produce the rewritten order
    fn transfer(&self, order: Order) -> Order;

    /// Stable name for built-in strategies, `None` for ad hoc ones
    fn name(&self) -> Option<&'static str> {
        None
    }
}

impl<F> ResortStrategy for F
where
    F: Fn(Order) -> Order + Send + Sync,
{
    fn transfer(&self, order: Order) -> Order {
        self(order)
    }
}

/// Built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResortStrategies {
    /// Leave property names as they are
    #[default]
    SameCase,
    /// Translate camelCase property names to snake_case
    SnakeCase,
}

impl ResortStrategies {
    /// Translate a property name according to this strategy
    pub fn translate(&self, name: &str) -> String {
        match self {
            Self::SameCase => name.to_string(),
            Self::SnakeCase => to_snake_case(name),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SameCase => "same_case",
            Self::SnakeCase => "snake_case",
        }
    }
}

impl ResortStrategy for ResortStrategies {
    fn transfer(&self, order: Order) -> Order {
        let property = self.translate(order.property());
        order.with_property(property)
    }

    fn name(&self) -> Option<&'static str> {
        Some(self.as_str())
    }
}

impl fmt::Display for ResortStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResortStrategies {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "same_case" => Ok(Self::SameCase),
            "snake_case" => Ok(Self::SnakeCase),
            other => Err(Error::invalid_argument(format!(
                "Unknown resort strategy '{}'",
                other
            ))),
        }
    }
}

/// camelCase to snake_case, one character at a time
///
/// An underscore goes before an upper-case letter unless the output is still
/// empty, already ends in `_`, or the previous character was itself an
/// upper-case letter. A single leading `_` is dropped. Runs of capitals are
/// therefore folded together: `ABCField` becomes `abcfield` and `userID`
/// becomes `user_id`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() * 2);
    let mut prev_translated = false;
    for (i, c) in name.chars().enumerate() {
        if i == 0 && c == '_' {
            continue;
        }
        if c.is_uppercase() {
            if !prev_translated && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_translated = true;
        } else {
            result.push(c);
            prev_translated = false;
        }
    }
    if result.is_empty() {
        name.to_string()
    } else {
        result
    }
}

/// Cheaply clonable handle to a [`ResortStrategy`]
///
/// Two handles are equal when both wrap the same named built-in strategy or
/// point at the same allocation.
#[derive(Clone)]
pub struct SharedResortStrategy(Arc<dyn ResortStrategy>);

impl SharedResortStrategy {
    pub fn new<S>(strategy: S) -> Self
    where
        S: ResortStrategy + 'static,
    {
        Self(Arc::new(strategy))
    }

    pub fn name(&self) -> Option<&'static str> {
        self.0.name()
    }
}

impl ResortStrategy for SharedResortStrategy {
    fn transfer(&self, order: Order) -> Order {
        self.0.transfer(order)
    }

    fn name(&self) -> Option<&'static str> {
        self.0.name()
    }
}

impl Default for SharedResortStrategy {
    fn default() -> Self {
        ResortStrategies::default().into()
    }
}

impl From<ResortStrategies> for SharedResortStrategy {
    fn from(strategy: ResortStrategies) -> Self {
        Self::new(strategy)
    }
}

impl PartialEq for SharedResortStrategy {
    fn eq(&self, other: &Self) -> bool {
        match (self.name(), other.name()) {
            (Some(left), Some(right)) => left == right,
            _ => Arc::ptr_eq(&self.0, &other.0),
        }
    }
}

impl fmt::Debug for SharedResortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedResortStrategy")
            .field(&self.name().unwrap_or("custom"))
            .finish()
    }
}

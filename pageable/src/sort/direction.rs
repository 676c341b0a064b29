//! Sort direction and null ordering hints

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Direction for ordering results
///
/// # Example
///
/// ```rust
/// use pageable::Direction;
///
/// let desc: Direction = "DeSc".parse().unwrap();
/// assert_eq!(desc, Direction::Desc);
/// assert_eq!(format!("{}", Direction::Asc), "asc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    Asc,
    /// Sort in descending order (Z-A, 9-0)
    Desc,
}

impl Direction {
    /// Parse a direction, returning `None` when the value is not recognized
    ///
    /// # Example
    ///
    /// ```rust
    /// use pageable::Direction;
    ///
    /// assert_eq!(Direction::parse_opt("asc"), Some(Direction::Asc));
    /// assert_eq!(Direction::parse_opt("sideways"), None);
    /// ```
    #[must_use]
    pub fn parse_opt(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Whether this is [`Direction::Asc`]
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Upper-case SQL keyword for this direction
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(Error::invalid_argument(format!(
                "Invalid value '{}' for orders given! \
                 Has to be either 'desc' or 'asc' (case insensitive).",
                value
            )))
        }
    }
}

/// Null handling hint attached to an [`Order`](crate::Order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NullHandling {
    /// Lets the data store decide what to do with nulls
    #[default]
    Native,
    /// Order entries with null values before non-null entries
    NullsFirst,
    /// Order entries with null values after non-null entries
    NullsLast,
}

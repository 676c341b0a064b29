//! Named switches carried by a page request

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How much derived metadata to return alongside a page
///
/// # Example
///
/// ```rust
/// use pageable::PageableVerbose;
///
/// let verbose: PageableVerbose = "page".parse()?;
/// assert!(verbose.includes_page());
/// assert!(!verbose.includes_sort());
/// # Ok::<(), pageable::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageableVerbose {
    /// No metadata
    #[default]
    None,
    /// Pagination metrics and sort rules
    All,
    /// Pagination metrics only
    Page,
    /// Sort rules only
    Sort,
}

impl PageableVerbose {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::Page => "page",
            Self::Sort => "sort",
        }
    }

    /// Whether pagination metrics are requested
    pub const fn includes_page(&self) -> bool {
        matches!(self, Self::All | Self::Page)
    }

    /// Whether the active sort rules are requested
    pub const fn includes_sort(&self) -> bool {
        matches!(self, Self::All | Self::Sort)
    }
}

impl fmt::Display for PageableVerbose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PageableVerbose {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "all" => Ok(Self::All),
            "page" => Ok(Self::Page),
            "sort" => Ok(Self::Sort),
            _ => Err(Error::invalid_argument(format!(
                "Invalid verbose value '{}'! Has to be one of 'none', 'all', 'page' or 'sort'.",
                value
            ))),
        }
    }
}

/// Boolean switches that [`Pageable::config`](crate::Pageable::config) can toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageConfigKey {
    /// Count the total number of records
    NeedTotal,
    /// Fetch the records themselves
    NeedContent,
    /// Clamp out-of-range page numbers instead of rejecting them
    FixEdge,
    /// Number pages from 1 instead of 0
    PageNumberOneIndexed,
}

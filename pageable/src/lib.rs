//! # pageable
//!
//! Storage-agnostic page requests, page responses and sort rewriting.
//!
//! ## Features
//!
//! - **Requests**: [`Pageable`] normalizes page number, page size and sort,
//!   and derives new requests for other pages or settings
//! - **Responses**: [`Page`] answers first/last/next/previous with or without
//!   a counted total
//! - **Sorting**: [`Sort`] keeps one [`Order`] per property and rewrites
//!   properties through a [`ResortStrategy`]
//! - **Metadata**: [`PageVerbose`] and [`PageResponse`] for response envelopes
//! - **Configuration**: [`PageDefaults`] loaded from `pageable.toml` and
//!   `PAGEABLE_*` environment variables
//!
//! ## Example
//!
//! ```rust
//! use pageable::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let defaults = PageDefaults::default();
//!     let pageable = PageBuilder::with_defaults(&defaults)
//!         .page(2)
//!         .size(20)
//!         .sort_by(Direction::Desc, ["createdAt"])
//!         .resort_strategy(ResortStrategies::SnakeCase)
//!         .build()?;
//!
//!     // the data source reads offset, limit and the rewritten sort
//!     assert_eq!(pageable.offset(), 20);
//!     let sort = pageable.sort_with_strategy(true).unwrap();
//!     assert_eq!(sort.to_query_strings(), vec!["created_at,desc"]);
//!
//!     let page = Page::new(vec!["row"; 20], pageable, Some(45));
//!     assert!(page.has_next());
//!     assert_eq!(page.next().page_number(), 3);
//!     assert_eq!(page.last().unwrap().page_number(), 3);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod page;
pub mod request;
pub mod resort;
pub mod response;
pub mod sort;
pub mod verbose;

pub use config::PageDefaults;
pub use error::{Error, ErrorResponse, Result};
pub use page::Page;
pub use request::{PageBuilder, PageConfigKey, Pageable, PageableVerbose};
pub use resort::{ResortStrategies, ResortStrategy, SharedResortStrategy};
pub use response::PageResponse;
pub use sort::{Direction, NullHandling, Order, Sort, SortLimit, SortOrderView};
pub use verbose::PageVerbose;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PageDefaults;
    pub use crate::error::{Error, Result};
    pub use crate::page::Page;
    pub use crate::request::{PageBuilder, PageConfigKey, Pageable, PageableVerbose};
    pub use crate::resort::{ResortStrategies, ResortStrategy, SharedResortStrategy};
    pub use crate::response::PageResponse;
    pub use crate::sort::{Direction, NullHandling, Order, Sort, SortLimit};
    pub use crate::verbose::PageVerbose;
}

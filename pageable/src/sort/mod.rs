//! Sort criteria and their collections
//!
//! - [`Order`]: one property with direction, case and null handling hints
//! - [`Sort`]: ordered, property-unique sequence of orders
//! - [`SortLimit`]: whitelist applied to client-supplied sorts

mod direction;
mod limit;
mod order;
mod sequence;

pub use direction::{Direction, NullHandling};
pub use limit::SortLimit;
pub use order::{Order, SortOrderView};
pub use sequence::Sort;

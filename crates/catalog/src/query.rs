//! Search and filter building blocks for collection queries.
//!
//! - Range values (`"min-max"`) and their inclusive bounds
//! - Service keywords derived from `has*` filter keys
//! - Compiled filter predicates over a single record
//! - Free-text search with exact-code priority

mod keyword;
mod predicate;
mod range;
mod search;

pub use keyword::service_keyword;
pub use predicate::FilterPredicate;
pub use range::NumericRange;
pub use search::{search, SearchMatcher};

//! Route and location search.
//!
//! Free-text search over the catalog using case-insensitive substring
//! matching. Results always keep catalog order.

mod filter;
mod query;


pub use filter::{
    FilterResult, RouteBuckets, SearchOutcome, filter, location_matches, partition_by_kind,
    route_matches, search,
};
pub use query::SearchQuery;

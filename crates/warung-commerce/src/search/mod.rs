//! Catalog search.
//!
//! Filters the catalog by a text query for the search overlay.

mod query;

pub use query::{search, SearchQuery};

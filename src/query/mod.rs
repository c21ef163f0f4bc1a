//! Filter, search and sort over a content snapshot
//!
//! The pipeline is stateless: [`run_query`] takes the collection and a
//! [`QuerySpec`] and returns a new ordered `Vec` without touching its input.

pub mod apply;
pub mod spec;

pub use apply::{locale_compare, run_query};
pub use spec::{CategoryFilter, ParseQueryError, QuerySpec, SortDirection, SortKey, SortOption};

//! Random Content - a categorized snippet library with random picks
//!
//! This library holds short text snippets tagged as house, apartment or land
//! listings and provides:
//!
//! - A [`ContentStore`] that owns the ordered collection and persists it to a
//!   pluggable [`KeyValueStore`] after every change
//! - A stateless query pipeline ([`run_query`]) for category filtering,
//!   case-insensitive search and stable sorting
//! - A sampler ([`sample`]) that picks distinct items uniformly at random
//!
//! # Example
//!
//! ```
//! use random_content::{Category, CategoryFilter, ContentStore, MemoryStorage, QuerySpec};
//! use random_content::{run_query, sample};
//!
//! let mut store = ContentStore::initialize(MemoryStorage::new());
//! store.add("3BR house near lake", Category::House)?;
//! store.add("Studio flat downtown", Category::Apartment)?;
//!
//! let spec = QuerySpec::new().category(CategoryFilter::Only(Category::House));
//! let houses = run_query(&store.all(), &spec);
//! assert_eq!(houses.len(), 1);
//!
//! let picked = sample(&houses, 5);
//! assert_eq!(picked.len(), 1);
//! # Ok::<(), random_content::StoreError>(())
//! ```

pub mod cli;
pub mod models;
pub mod query;
pub mod sampler;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use models::{Category, ContentItem, ItemId};
pub use query::{CategoryFilter, QuerySpec, SortDirection, SortKey, SortOption, run_query};
pub use sampler::{sample, sample_with};
pub use store::{ContentStore, FileStorage, KeyValueStore, MemoryStorage, StoreError};

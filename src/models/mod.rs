//! Data models for the content library.
//!
//! - [`ContentItem`] - An uploaded text snippet with its category and creation time
//! - [`Category`] - The closed set of categories an item can be tagged with
//! - [`ItemId`] - Store-assigned identifier, unique within a collection
//!
//! Items are immutable value objects. They are created only by
//! [`ContentStore::add`](crate::store::ContentStore::add) and serialize with the
//! field names used by the browser widget's `contentData` key.

pub mod category;
pub mod content;

pub use category::{Category, ParseCategoryError};
pub use content::{ContentItem, ItemId};

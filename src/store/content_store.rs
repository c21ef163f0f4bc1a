use std::io;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::codec::{decode_items, encode_items};
use super::error::StoreError;
use super::provider::KeyValueStore;
use crate::models::{Category, ContentItem, ItemId};
use crate::utils::timestamps::display_label;

/// Key the collection is persisted under
pub const STORAGE_KEY: &str = "contentData";

/// Owns the ordered content collection and keeps the provider in sync with it
///
/// Not thread-safe: callers sharing a store across threads must serialize access.
#[derive(Debug)]
pub struct ContentStore<S: KeyValueStore> {
    storage: S,
    items: Vec<ContentItem>,
    next_id: ItemId,
    diverged: bool,
}

impl<S: KeyValueStore> ContentStore<S> {
    /// Load the persisted collection, starting empty when it is absent or unusable
    pub fn initialize(storage: S) -> Self {
        let raw = match storage.get(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read '{}' from storage ({}), starting empty", STORAGE_KEY, e);
                None
            }
        };

        let mut items = decode_items(raw.as_deref());
        let next_id = match items.iter().map(ContentItem::id).max() {
            None => 1,
            Some(max) => match max.checked_add(1) {
                Some(next) => next,
                None => {
                    warn!("Persisted content uses id {}, no ids left; starting empty", max);
                    items.clear();
                    1
                }
            },
        };
        debug!("Loaded {} content items", items.len());

        Self { storage, items, next_id, diverged: false }
    }

    /// Append a new item created now
    pub fn add(&mut self, text: &str, category: Category) -> Result<ContentItem, StoreError> {
        self.add_at(text, category, Utc::now())
    }

    /// Append a new item with an explicit creation time
    ///
    /// Text is trimmed; blank text fails with [`StoreError::Validation`] and
    /// changes nothing. The display label is rendered here and never again.
    pub fn add_at(
        &mut self,
        text: &str,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Result<ContentItem, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation);
        }

        let following = self.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let item = ContentItem::new(
            self.next_id,
            text.to_string(),
            category,
            created_at,
            display_label(&created_at),
        );
        self.next_id = following;
        self.items.push(item.clone());
        debug!("Added item {} ({})", item.id(), category);

        self.persist_or_warn();
        Ok(item)
    }

    /// Remove the item with `id`, returning it if it existed
    pub fn remove(&mut self, id: ItemId) -> Option<ContentItem> {
        let removed = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .map(|index| self.items.remove(index));

        match removed {
            Some(_) => debug!("Removed item {}", id),
            None => debug!("Remove of unknown item {} ignored", id),
        }

        self.persist_or_warn();
        removed
    }

    /// Snapshot of the collection in insertion order
    pub fn all(&self) -> Vec<ContentItem> {
        self.items.clone()
    }

    pub fn get(&self, id: ItemId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True while the last write to storage failed
    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// Write the collection to storage, reporting failure to the caller
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let result = self.write();
        self.diverged = result.is_err();
        result.map_err(|source| StoreError::Persistence { key: STORAGE_KEY.to_string(), source })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_or_warn(&mut self) {
        if let Err(e) = self.flush() {
            warn!("{}; in-memory content kept until the next successful write", e);
        }
    }

    fn write(&mut self) -> io::Result<()> {
        let encoded =
            encode_items(&self.items).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.set(STORAGE_KEY, &encoded)
    }
}

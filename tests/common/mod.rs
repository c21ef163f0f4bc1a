//! Shared test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use random_content::{Category, ContentStore, MemoryStorage};

/// Fixed timestamp `secs` seconds after 2024-01-01T00:00:00Z
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

/// Builder for in-memory stores with deterministic creation times
pub struct StoreBuilder {
    entries: Vec<(String, Category, DateTime<Utc>)>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an item created `secs` seconds after the base time
    pub fn item(mut self, text: &str, category: Category, secs: i64) -> Self {
        self.entries.push((text.to_string(), category, ts(secs)));
        self
    }

    pub fn build(self) -> ContentStore<MemoryStorage> {
        let mut store = ContentStore::initialize(MemoryStorage::new());
        for (text, category, created_at) in self.entries {
            store.add_at(&text, category, created_at).expect("Failed to add test item");
        }
        store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Five listings, two of them land
pub fn listings_store() -> ContentStore<MemoryStorage> {
    StoreBuilder::new()
        .item("3BR house near lake", Category::House, 10)
        .item("Studio flat downtown", Category::Apartment, 20)
        .item("Two acres by the river", Category::Land, 30)
        .item("Townhouse with garden", Category::House, 40)
        .item("Hillside building plot", Category::Land, 50)
        .build()
}

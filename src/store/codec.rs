//! JSON codec for the persisted collection
//!
//! The value is a JSON array of item objects using the widget's field names
//! (`id`, `text`, `category`, `createdAt`, `displayDate`).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::models::ContentItem;

/// Serialize the full collection
pub fn encode_items(items: &[ContentItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Decode a persisted collection, treating anything unusable as empty
///
/// Missing values, blank strings and invalid JSON never fail. Within a valid
/// document, items with blank text are dropped and duplicate ids keep their
/// first occurrence.
pub fn decode_items(raw: Option<&str>) -> Vec<ContentItem> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let parsed = match serde_json::from_str::<Vec<ContentItem>>(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Ignoring malformed persisted content ({}), starting empty", e);
            return Vec::new();
        }
    };

    let total = parsed.len();
    let mut seen = HashSet::with_capacity(total);
    let items: Vec<ContentItem> = parsed
        .into_iter()
        .filter_map(|item| {
            let text = item.text().trim();
            if text.is_empty() || !seen.insert(item.id()) {
                return None;
            }
            if text.len() == item.text().len() {
                return Some(item);
            }
            Some(ContentItem::new(
                item.id(),
                text.to_string(),
                item.category(),
                item.created_at(),
                item.display_label().to_string(),
            ))
        })
        .collect();

    if items.len() < total {
        warn!("Dropped {} invalid or duplicate persisted items", total - items.len());
    }

    items
}

/// `createdAt` as written by either side
///
/// This crate writes RFC3339 strings. Older widget data stored the raw
/// `Date.now()` value, so integer epoch milliseconds are accepted as well.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| Error::custom(format!("createdAt {} is not a valid epoch-ms value", n))),
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("createdAt '{}' is not RFC3339: {}", s, e))),
        other => Err(Error::custom(format!("createdAt must be a string or number, got {}", other))),
    }
}

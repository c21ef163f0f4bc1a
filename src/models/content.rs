use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Store-assigned item identifier
pub type ItemId = u64;

/// A single uploaded text snippet.
///
/// `display_label` is rendered once from `created_at` when the item is created
/// and stored alongside it. Readers must use the stored label rather than
/// formatting `created_at` again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    id: ItemId,
    text: String,
    category: Category,
    #[serde(
        rename = "createdAt",
        deserialize_with = "crate::store::codec::deserialize_timestamp"
    )]
    created_at: DateTime<Utc>,
    #[serde(rename = "displayDate")]
    display_label: String,
}

impl ContentItem {
    /// Build an item from already-validated parts. `text` must be trimmed and non-empty.
    pub(crate) fn new(
        id: ItemId,
        text: String,
        category: Category,
        created_at: DateTime<Utc>,
        display_label: String,
    ) -> Self {
        debug_assert!(!text.is_empty() && text.trim() == text);
        Self { id, text, category, created_at, display_label }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_serializes_with_widget_field_names() {
        let item = ContentItem::new(
            7,
            "Corner lot".to_string(),
            Category::Land,
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            "6/15/2024, 12:00:00 PM".to_string(),
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["text"], "Corner lot");
        assert_eq!(value["category"], "land");
        assert_eq!(value["createdAt"], "2024-06-15T12:00:00Z");
        assert_eq!(value["displayDate"], "6/15/2024, 12:00:00 PM");
    }

    #[test]
    fn test_deserializes_widget_record() {
        let json = r#"{
            "id": 1718452800000,
            "text": "3BR house near lake",
            "category": "house",
            "createdAt": "2024-06-15T12:00:00.000Z",
            "displayDate": "6/15/2024, 2:00:00 PM"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), 1718452800000);
        assert_eq!(item.category(), Category::House);
        assert_eq!(item.created_at(), Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        assert_eq!(item.display_label(), "6/15/2024, 2:00:00 PM");
    }
}

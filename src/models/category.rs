use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category a content item is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Apartment,
    Land,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected house, apartment or land)")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 3] = [Category::House, Category::Apartment, Category::Land];

    /// Stored value, as written to persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Apartment => "apartment",
            Category::Land => "land",
        }
    }

    /// Human-readable label shown next to items
    pub fn label(&self) -> &'static str {
        match self {
            Category::House => "House",
            Category::Apartment => "Flat/Apartment",
            Category::Land => "Land",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "house" => Ok(Category::House),
            "apartment" | "flat" => Ok(Category::Apartment),
            "land" => Ok(Category::Land),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQueryError {
    #[error("Unknown category filter '{0}' (expected all, house, apartment or land)")]
    Category(String),
    #[error("Unknown sort option '{0}' (expected date-asc, date-desc, alphabetical-asc or alphabetical-desc)")]
    Sort(String),
}

/// Which categories a query keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| ParseQueryError::Category(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// By `created_at`
    #[default]
    CreationTime,
    /// By text, locale-aware
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Sort key and direction as one value, written `<key>-<direction>`
///
/// Accepted keys: `date`, `alphabetical` (alias `alpha`).
/// Accepted directions: `asc`, `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOption {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl FromStr for SortOption {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseQueryError::Sort(s.to_string());
        let lower = s.trim().to_lowercase();
        let (key, direction) = lower.rsplit_once('-').ok_or_else(err)?;

        let key = match key {
            "date" => SortKey::CreationTime,
            "alphabetical" | "alpha" => SortKey::Alphabetical,
            _ => return Err(err()),
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return Err(err()),
        };

        Ok(Self { key, direction })
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::CreationTime => "date",
            SortKey::Alphabetical => "alphabetical",
        };
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}-{}", key, direction)
    }
}

/// Category filter, search term and ordering applied when deriving a view
///
/// The default keeps everything, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySpec {
    pub category_filter: CategoryFilter,
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category_filter = filter;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    pub fn sort_option(self, option: SortOption) -> Self {
        self.sort(option.key, option.direction)
    }
}

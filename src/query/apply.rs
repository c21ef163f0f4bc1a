use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::spec::{QuerySpec, SortDirection, SortKey};
use crate::models::ContentItem;

/// Derive the filtered, sorted view of `items` described by `spec`
///
/// Steps, in order:
/// 1. Keep items whose category passes the category filter
/// 2. Keep items whose text contains the search term, case-insensitively (skipped for an empty term)
/// 3. Stable sort by the sort key; descending inverts the comparison, so ties
///    keep insertion order in both directions
pub fn run_query(items: &[ContentItem], spec: &QuerySpec) -> Vec<ContentItem> {
    let term = spec.search_term.to_lowercase();

    let mut view: Vec<ContentItem> = items
        .iter()
        .filter(|item| spec.category_filter.matches(item.category()))
        .filter(|item| term.is_empty() || item.text().to_lowercase().contains(&term))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare(a, b, spec.sort_key);
        match spec.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}

fn compare(a: &ContentItem, b: &ContentItem, key: SortKey) -> Ordering {
    match key {
        SortKey::CreationTime => a.created_at().cmp(&b.created_at()),
        SortKey::Alphabetical => locale_compare(a.text(), b.text()),
    }
}

/// Collation-style string comparison
///
/// Letters compare ignoring accents and case first ("apple" < "Banana",
/// "Eagle" < "Élan" < "Fjord"); strings that differ only in case put lowercase
/// first ("lot" < "Lot"). Anything still equal falls back to code point order,
/// which puts unaccented before accented ("Elan" < "Élan").
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a).cmp(primary_key(b)).then_with(|| case_order(a, b)).then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped, lowercased
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

/// Order of the first position where two case-equal strings differ
fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
        .unwrap_or(Ordering::Equal)
}

//! Free-text and category filtering for catalogue lists

use super::SearchableRecord;

/// Category value that disables the category facet
pub const ALL_CATEGORIES: &str = "all";

/// A compiled search box + category picker selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    /// Lowercased search text; empty means no text filter
    needle: String,
    /// `None` when every category is selected
    category: Option<String>,
}

impl RecordQuery {
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
            category: if category == ALL_CATEGORIES {
                None
            } else {
                Some(category.to_string())
            },
        }
    }

    /// Category must match exactly; text matches title or description, ignoring case
    pub fn matches<R: SearchableRecord + ?Sized>(&self, record: &R) -> bool {
        if let Some(category) = &self.category {
            if record.category() != category {
                return false;
            }
        }
        self.needle.is_empty()
            || record.title().to_lowercase().contains(&self.needle)
            || record.description().to_lowercase().contains(&self.needle)
    }

    /// Lazily yield the matching records in their original order
    pub fn apply<'a, R: SearchableRecord>(&self, records: &'a [R]) -> impl Iterator<Item = &'a R> + Clone {
        let query = self.clone();
        records.iter().filter(move |record| query.matches(*record))
    }
}

/// Filter `records` by search text and category (`"all"` for any)
///
/// The returned iterator is lazy, finite and preserves input order; clone it
/// to walk the matches again.
pub fn filter_records<'a, R: SearchableRecord>(
    records: &'a [R],
    query: &str,
    category: &str,
) -> impl Iterator<Item = &'a R> + Clone {
    RecordQuery::new(query, category).apply(records)
}

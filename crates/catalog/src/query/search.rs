//! Free-text search with exact-code priority.

use crate::collection::TextField;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatcher {
    needle: String,
}

impl SearchMatcher {
    /// Trims and lowercases the raw query. Returns `None` when nothing is
    /// left, in which case search does not narrow the collection.
    pub fn compile(raw_query: &str) -> Option<Self> {
        let needle = raw_query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Some(Self { needle })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// True when any code field equals the query, ignoring case.
    pub fn is_exact_code<E>(&self, entity: &E, code_fields: &[TextField<E>]) -> bool {
        code_fields
            .iter()
            .filter_map(|field| field(entity))
            .any(|code| code.trim().to_lowercase() == self.needle)
    }

    /// True when the query is a substring of any searchable field.
    pub fn is_partial<E>(&self, entity: &E, search_fields: &[TextField<E>]) -> bool {
        search_fields
            .iter()
            .filter_map(|field| field(entity))
            .any(|text| text.to_lowercase().contains(self.needle.as_str()))
    }

    /// Narrows `items` to the search hits.
    ///
    /// If any entity carries the query as an exact code, only those entities
    /// are returned; substring hits are not considered at all. Otherwise every
    /// entity with a substring hit is returned. Input order is preserved.
    pub fn rank<'a, E>(
        &self,
        items: Vec<&'a E>,
        code_fields: &[TextField<E>],
        search_fields: &[TextField<E>],
    ) -> Vec<&'a E> {
        let exact: Vec<&'a E> = items
            .iter()
            .copied()
            .filter(|entity| self.is_exact_code(*entity, code_fields))
            .collect();
        if !exact.is_empty() {
            tracing::debug!(query = %self.needle, hits = exact.len(), "exact code match");
            return exact;
        }

        items
            .into_iter()
            .filter(|entity| self.is_partial(*entity, search_fields))
            .collect()
    }
}

/// Applies a raw query to `items`. An empty query returns `items` unchanged.
pub fn search<'a, E>(
    items: Vec<&'a E>,
    raw_query: &str,
    code_fields: &[TextField<E>],
    search_fields: &[TextField<E>],
) -> Vec<&'a E> {
    match SearchMatcher::compile(raw_query) {
        Some(matcher) => matcher.rank(items, code_fields, search_fields),
        None => items,
    }
}

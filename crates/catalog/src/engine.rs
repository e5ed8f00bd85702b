//! Query evaluation over a fully loaded collection.
//!
//! The pipeline is: drop null entries, apply search on the committed term,
//! apply the conjunction of all present filters, then cut the pagination
//! window. Evaluation is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::collection::CollectionConfig;
use crate::entity::FilterSet;
use crate::query::{search, FilterPredicate};

/// Mutable query inputs owned by one screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Live input text.
    pub search_term: String,
    /// Committed search text; the only term evaluation reads.
    pub debounced_search_term: String,
    pub filters: FilterSet,
    pub page: usize,
}

impl QueryState {
    pub fn new(initial_page: usize) -> Self {
        Self {
            search_term: String::new(),
            debounced_search_term: String::new(),
            filters: FilterSet::new(),
            page: initial_page,
        }
    }
}

/// Derived view of a query. Never stored independently of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a, E> {
    /// Non-null records supplied by the source.
    pub total_count: usize,
    /// Records left after search and filters.
    pub filtered_count: usize,
    /// The first `page * page_size` filtered records.
    pub paginated_items: Vec<&'a E>,
    pub has_more: bool,
}

/// All predicates for a filter set, compiled against one collection config.
pub struct CompiledFilters<E> {
    predicates: Vec<FilterPredicate<E>>,
}

impl<E> CompiledFilters<E> {
    pub fn compile(filters: &FilterSet, config: &CollectionConfig<E>) -> Self {
        let predicates = filters
            .iter()
            .filter_map(|(key, value)| match config.filter(key) {
                Some(field) => Some(FilterPredicate::build(key, field, value)),
                None => {
                    tracing::debug!(
                        collection = config.name(),
                        key = key.as_str(),
                        "skipping unknown filter key"
                    );
                    None
                }
            })
            .filter(|predicate| !predicate.is_pass())
            .collect();
        Self { predicates }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Stops at the first failing predicate.
    pub fn matches(&self, entity: &E, config: &CollectionConfig<E>) -> bool {
        let services = config.services_of(entity);
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(entity, services))
    }
}

/// Evaluates `query` against `collection`.
///
/// `None` entries are dropped before anything else runs.
pub fn evaluate<'a, E>(
    collection: &'a [Option<E>],
    query: &QueryState,
    config: &CollectionConfig<E>,
    page_size: usize,
) -> QueryResult<'a, E> {
    let present: Vec<&'a E> = collection.iter().flatten().collect();
    let total_count = present.len();

    let searched = search(
        present,
        &query.debounced_search_term,
        config.code_fields(),
        config.search_fields(),
    );

    let filters = CompiledFilters::compile(&query.filters, config);
    let filtered: Vec<&'a E> = if filters.is_empty() {
        searched
    } else {
        searched
            .into_iter()
            .filter(|entity| filters.matches(entity, config))
            .collect()
    };

    let filtered_count = filtered.len();
    let window = query.page.saturating_mul(page_size).min(filtered_count);
    let mut paginated_items = filtered;
    paginated_items.truncate(window);
    let has_more = paginated_items.len() < filtered_count;

    tracing::debug!(
        collection = config.name(),
        total = total_count,
        filtered = filtered_count,
        visible = paginated_items.len(),
        page = query.page,
        "evaluated collection query"
    );

    QueryResult {
        total_count,
        filtered_count,
        paginated_items,
        has_more,
    }
}

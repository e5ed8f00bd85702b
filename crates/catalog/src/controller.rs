//! Query state holder for one discover screen.
//!
//! The controller owns the mutable inputs (search term, filters, page) and the
//! search debounce timer. Derived output is recomputed from a fresh
//! [`FetchState`] snapshot on every [`CollectionQueryController::view`] call;
//! the controller never holds on to the collection.

use std::sync::Arc;

use crate::collection::CollectionConfig;
use crate::config::QueryConfig;
use crate::debounce::Debouncer;
use crate::engine::{evaluate, CompiledFilters, QueryState};
use crate::entity::FilterSet;
use crate::source::{FetchError, FetchState};

/// Everything a list screen renders.
#[derive(Debug)]
pub struct CollectionView<'a, E> {
    pub paginated_items: Vec<&'a E>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_more: bool,
    pub is_loading: bool,
    pub is_search_loading: bool,
    pub is_error: bool,
    pub error: Option<&'a FetchError>,
    pub search_term: &'a str,
    pub filters: &'a FilterSet,
}

#[derive(Debug)]
pub struct CollectionQueryController<E> {
    collection: Arc<CollectionConfig<E>>,
    config: QueryConfig,
    state: QueryState,
    search_debounce: Debouncer<String>,
}

impl<E> CollectionQueryController<E> {
    pub fn new(collection: Arc<CollectionConfig<E>>, config: QueryConfig) -> Self {
        Self {
            state: QueryState::new(config.initial_page),
            search_debounce: Debouncer::new(config.debounce_delay()),
            collection,
            config,
        }
    }

    pub fn collection(&self) -> &CollectionConfig<E> {
        &self.collection
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn debounced_search_term(&self) -> &str {
        &self.state.debounced_search_term
    }

    pub fn filters(&self) -> &FilterSet {
        &self.state.filters
    }

    pub fn page(&self) -> usize {
        self.state.page
    }

    /// True while the live term has not been committed yet.
    pub fn is_search_loading(&self) -> bool {
        self.state.search_term != self.state.debounced_search_term
    }

    /// Updates the live term and re-arms the debounce timer.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.state.search_term = term.clone();
        if self.search_debounce.schedule(term) {
            tracing::trace!(collection = self.collection.name(), "superseded pending search");
        }
    }

    /// Commits the pending term if its delay has elapsed.
    ///
    /// Returns `true` when the committed term changed.
    pub fn poll_search(&mut self) -> bool {
        match self.search_debounce.poll_expired() {
            Some(term) => self.commit_search(term),
            None => false,
        }
    }

    /// Waits for the pending term and commits it.
    ///
    /// Returns `true` when the committed term changed.
    pub async fn settle_search(&mut self) -> bool {
        match self.search_debounce.fire().await {
            Some(term) => self.commit_search(term),
            None => false,
        }
    }

    /// Clears the search box and commits the empty term immediately.
    pub fn clear_search(&mut self) {
        self.search_debounce.cancel();
        self.state.search_term.clear();
        self.commit_search(String::new());
    }

    /// Replaces the whole filter set and goes back to the first page.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.state.filters = filters;
        self.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(FilterSet::new());
    }

    /// Number of filters that actually constrain the list.
    pub fn active_filter_count(&self) -> usize {
        CompiledFilters::compile(&self.state.filters, &*self.collection).len()
    }

    /// Grows the window by one page. A no-op while the source is loading or
    /// when everything is already visible.
    pub fn load_more(&mut self, source: &FetchState<E>) -> bool {
        if source.is_loading {
            return false;
        }
        let result = evaluate(
            source.items(),
            &self.state,
            &*self.collection,
            self.config.page_size,
        );
        if !result.has_more {
            return false;
        }
        self.state.page += 1;
        true
    }

    /// Recomputes the visible list against the current source snapshot.
    pub fn view<'a>(&'a self, source: &'a FetchState<E>) -> CollectionView<'a, E> {
        let result = evaluate(
            source.items(),
            &self.state,
            &*self.collection,
            self.config.page_size,
        );
        CollectionView {
            paginated_items: result.paginated_items,
            filtered_count: result.filtered_count,
            total_count: result.total_count,
            has_more: result.has_more,
            is_loading: source.is_loading,
            is_search_loading: self.is_search_loading(),
            is_error: source.is_error,
            error: source.error.as_ref(),
            search_term: &self.state.search_term,
            filters: &self.state.filters,
        }
    }

    fn commit_search(&mut self, term: String) -> bool {
        if term == self.state.debounced_search_term {
            return false;
        }
        tracing::trace!(
            collection = self.collection.name(),
            term = term.as_str(),
            "committed search term"
        );
        self.state.debounced_search_term = term;
        self.reset_page();
        true
    }

    fn reset_page(&mut self) {
        self.state.page = self.config.initial_page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::FilterValue;
    use std::time::Duration;
    use tokio::time::advance;

    #[derive(Debug)]
    struct Row {
        code: String,
        score: f64,
    }

    fn rows(count: usize) -> FetchState<Row> {
        FetchState::ready(
            (0..count)
                .map(|i| Row {
                    code: format!("R{i:02}"),
                    score: i as f64,
                })
                .collect(),
        )
    }

    fn controller() -> CollectionQueryController<Row> {
        let collection = CollectionConfig::<Row>::builder("rows")
            .code_field(|row| Some(row.code.as_str()))
            .range("score", |row| Some(row.score))
            .build();
        CollectionQueryController::new(Arc::new(collection), QueryConfig::default())
    }

    #[test]
    fn load_more_extends_window_until_exhausted() {
        let source = rows(45);
        let mut controller = controller();
        assert_eq!(controller.view(&source).paginated_items.len(), 20);

        assert!(controller.load_more(&source));
        assert_eq!(controller.view(&source).paginated_items.len(), 40);

        assert!(controller.load_more(&source));
        let view = controller.view(&source);
        assert_eq!(view.paginated_items.len(), 45);
        assert!(!view.has_more);

        assert!(!controller.load_more(&source));
        assert_eq!(controller.page(), 3);
    }

    #[test]
    fn load_more_is_noop_while_loading() {
        let mut source = rows(45);
        source.is_loading = true;
        let mut controller = controller();
        assert!(!controller.load_more(&source));
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn set_filters_resets_page() {
        let source = rows(45);
        let mut controller = controller();
        controller.load_more(&source);
        assert_eq!(controller.page(), 2);

        let filters = FilterSet::from([("score".to_string(), FilterValue::from("0-9"))]);
        controller.set_filters(filters);
        assert_eq!(controller.page(), 1);
        let view = controller.view(&source);
        assert_eq!(view.filtered_count, 10);
        assert_eq!(view.total_count, 45);
        assert_eq!(controller.active_filter_count(), 1);

        controller.clear_filters();
        assert_eq!(controller.active_filter_count(), 0);
    }

    #[test]
    fn malformed_filters_are_not_counted_as_active() {
        let mut controller = controller();
        controller.set_filters(FilterSet::from([
            ("score".to_string(), FilterValue::from("oops")),
            ("unknown".to_string(), FilterValue::from(true)),
        ]));
        assert_eq!(controller.active_filter_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn search_commits_after_delay_and_resets_page() {
        let source = rows(45);
        let mut controller = controller();
        controller.load_more(&source);

        controller.set_search_term("R0");
        assert!(controller.is_search_loading());
        assert_eq!(controller.debounced_search_term(), "");
        assert_eq!(controller.page(), 2);

        advance(Duration::from_millis(300)).await;
        assert!(controller.poll_search());
        assert!(!controller.is_search_loading());
        assert_eq!(controller.page(), 1);
        assert_eq!(controller.view(&source).filtered_count, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_commits_only_final_term() {
        let mut controller = controller();
        for term in ["R", "R1", "R12"] {
            controller.set_search_term(term);
            advance(Duration::from_millis(100)).await;
            assert!(!controller.poll_search());
        }
        assert!(controller.settle_search().await);
        assert_eq!(controller.debounced_search_term(), "R12");
        assert!(!controller.settle_search().await);
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_commit_keeps_page() {
        let source = rows(45);
        let mut controller = controller();
        controller.load_more(&source);
        controller.set_search_term("x");
        controller.set_search_term("");
        assert!(!controller.settle_search().await);
        assert_eq!(controller.page(), 2);
    }

    #[test]
    fn clear_search_commits_immediately() {
        let source = rows(45);
        let mut controller = controller();
        controller.set_search_term("R01");
        controller.clear_search();
        assert!(!controller.is_search_loading());
        assert_eq!(controller.view(&source).filtered_count, 45);
    }

    #[test]
    fn view_passes_fetch_error_through() {
        let error: FetchError = Arc::new(std::io::Error::other("timeout"));
        let source: FetchState<Row> = FetchState::failed(error);
        let controller = controller();
        let view = controller.view(&source);
        assert!(view.is_error);
        assert_eq!(view.error.map(|e| e.to_string()), Some("timeout".to_string()));
        assert_eq!(view.filtered_count, 0);
        assert!(!view.has_more);
    }
}

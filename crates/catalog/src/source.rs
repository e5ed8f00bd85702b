//! Snapshot of the upstream fetch layer.
//!
//! The fetch layer owns loading and refetching; the query engine only reads
//! whatever snapshot it is handed on each recomputation.

use std::error::Error;
use std::sync::Arc;

/// Error reported by the fetch layer, passed through untouched.
pub type FetchError = Arc<dyn Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct FetchState<E> {
    /// The full unfiltered collection. `None` until the first load lands;
    /// individual entries may also be null.
    pub data: Option<Vec<Option<E>>>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<FetchError>,
}

impl<E> Default for FetchState<E> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: false,
            error: None,
        }
    }
}

impl<E> FetchState<E> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn ready(data: Vec<E>) -> Self {
        Self {
            data: Some(data.into_iter().map(Some).collect()),
            ..Self::default()
        }
    }

    pub fn failed(error: FetchError) -> Self {
        Self {
            is_error: true,
            error: Some(error),
            ..Self::default()
        }
    }

    /// The collection, with a missing one read as empty.
    pub fn items(&self) -> &[Option<E>] {
        self.data.as_deref().unwrap_or_default()
    }
}

//! In-memory query engine for the airport and airline discover lists.
//!
//! This crate provides:
//! - Declarative filters (ranges, flags, categories, service keywords, minimum ratings)
//! - Free-text search with exact IATA/ICAO code priority
//! - Windowed pagination over a fully loaded collection
//! - A debounced per-screen controller that recomputes the visible list
//!
//! The engine is generic over the record type; each entity kind supplies a
//! [`CollectionConfig`] naming where its fields live.

pub mod airline;
pub mod airport;
pub mod collection;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod engine;
pub mod entity;
pub mod error;
mod lenient;
pub mod query;
pub mod source;

// Re-export main types
pub use airline::{airline_collection, Airline};
pub use airport::{airport_collection, Airport};
pub use collection::{CollectionConfig, FilterField};
pub use config::{QueryConfig, DEFAULT_PAGE_SIZE as PAGE_SIZE};
pub use controller::{CollectionQueryController, CollectionView};
pub use debounce::Debouncer;
pub use engine::{evaluate, QueryResult, QueryState};
pub use entity::{Entity, FilterKind, FilterSet, FilterValue, Ratings};
pub use error::{CatalogError, Result};
pub use query::{NumericRange, SearchMatcher};
pub use source::{FetchError, FetchState};

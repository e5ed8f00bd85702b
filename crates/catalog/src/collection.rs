//! Per-entity accessor maps.
//!
//! A [`CollectionConfig`] tells the query engine where each filter key and
//! search field lives on a record. Airports and airlines each build one; the
//! engine itself never names a concrete field.

use std::collections::BTreeMap;
use std::fmt;

use crate::entity::FilterKind;
use crate::query::service_keyword;

pub type NumberField<E> = fn(&E) -> Option<f64>;
pub type FlagField<E> = fn(&E) -> Option<bool>;
pub type TextField<E> = fn(&E) -> Option<&str>;
pub type ListField<E> = fn(&E) -> Option<&[String]>;

/// Where a filter key reads from, tagged with its kind.
pub enum FilterField<E> {
    Range(NumberField<E>),
    Boolean(FlagField<E>),
    CategoricalExact(TextField<E>),
    /// Matches against the collection's `services` list using this keyword.
    ServiceMembership { keyword: String },
    MinThreshold(NumberField<E>),
}

impl<E> FilterField<E> {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Range(_) => FilterKind::Range,
            Self::Boolean(_) => FilterKind::Boolean,
            Self::CategoricalExact(_) => FilterKind::CategoricalExact,
            Self::ServiceMembership { .. } => FilterKind::ServiceMembership,
            Self::MinThreshold(_) => FilterKind::MinThreshold,
        }
    }
}

impl<E> fmt::Debug for FilterField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceMembership { keyword } => f
                .debug_struct("ServiceMembership")
                .field("keyword", keyword)
                .finish(),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// Accessor map for one entity kind.
pub struct CollectionConfig<E> {
    name: &'static str,
    code_fields: Vec<TextField<E>>,
    search_fields: Vec<TextField<E>>,
    services: Option<ListField<E>>,
    filters: BTreeMap<String, FilterField<E>>,
}

impl<E> CollectionConfig<E> {
    pub fn builder(name: &'static str) -> CollectionConfigBuilder<E> {
        CollectionConfigBuilder {
            config: CollectionConfig {
                name,
                code_fields: Vec::new(),
                search_fields: Vec::new(),
                services: None,
                filters: BTreeMap::new(),
            },
            keyword_overrides: BTreeMap::new(),
            service_keys: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields compared for exact-code matches (IATA/ICAO).
    pub fn code_fields(&self) -> &[TextField<E>] {
        &self.code_fields
    }

    /// Fields scanned for substring matches.
    pub fn search_fields(&self) -> &[TextField<E>] {
        &self.search_fields
    }

    pub fn services_of<'a>(&self, entity: &'a E) -> Option<&'a [String]> {
        self.services.and_then(|field| field(entity))
    }

    pub fn filter(&self, key: &str) -> Option<&FilterField<E>> {
        self.filters.get(key)
    }

    pub fn filter_kind(&self, key: &str) -> Option<FilterKind> {
        self.filter(key).map(FilterField::kind)
    }

    pub fn filter_keys(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}

impl<E> fmt::Debug for CollectionConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionConfig")
            .field("name", &self.name)
            .field("code_fields", &self.code_fields.len())
            .field("search_fields", &self.search_fields.len())
            .field("filters", &self.filters)
            .finish()
    }
}

pub struct CollectionConfigBuilder<E> {
    config: CollectionConfig<E>,
    keyword_overrides: BTreeMap<String, String>,
    service_keys: Vec<String>,
}

impl<E> CollectionConfigBuilder<E> {
    /// Adds a code field. Code fields are also searched as substrings.
    pub fn code_field(mut self, field: TextField<E>) -> Self {
        self.config.code_fields.push(field);
        self.config.search_fields.push(field);
        self
    }

    pub fn search_field(mut self, field: TextField<E>) -> Self {
        self.config.search_fields.push(field);
        self
    }

    pub fn services(mut self, field: ListField<E>) -> Self {
        self.config.services = Some(field);
        self
    }

    pub fn range(self, key: &str, field: NumberField<E>) -> Self {
        self.insert(key, FilterField::Range(field))
    }

    pub fn boolean(self, key: &str, field: FlagField<E>) -> Self {
        self.insert(key, FilterField::Boolean(field))
    }

    pub fn categorical(self, key: &str, field: TextField<E>) -> Self {
        self.insert(key, FilterField::CategoricalExact(field))
    }

    /// Registers a membership filter whose keyword is derived from the key.
    pub fn service(mut self, key: &str) -> Self {
        self.service_keys.push(key.to_string());
        self
    }

    /// Overrides the derived keyword for a membership filter.
    pub fn service_keyword(mut self, key: &str, keyword: &str) -> Self {
        self.keyword_overrides
            .insert(key.to_string(), keyword.to_lowercase());
        self
    }

    pub fn min_threshold(self, key: &str, field: NumberField<E>) -> Self {
        self.insert(key, FilterField::MinThreshold(field))
    }

    pub fn build(mut self) -> CollectionConfig<E> {
        for key in std::mem::take(&mut self.service_keys) {
            let keyword = self
                .keyword_overrides
                .remove(&key)
                .unwrap_or_else(|| service_keyword(&key));
            self.config
                .filters
                .insert(key, FilterField::ServiceMembership { keyword });
        }
        for key in self.keyword_overrides.keys() {
            tracing::warn!(
                collection = self.config.name,
                key = key.as_str(),
                "service keyword override for unregistered filter"
            );
        }
        self.config
    }

    fn insert(mut self, key: &str, field: FilterField<E>) -> Self {
        self.config.filters.insert(key.to_string(), field);
        self
    }
}

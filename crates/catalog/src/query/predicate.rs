//! Filter predicates compiled from a filter key and its raw value.
//!
//! Every predicate is total: a missing or malformed field on the record
//! resolves to "does not satisfy" unless noted otherwise below. A malformed
//! filter *value* compiles to [`FilterPredicate::Pass`] so a bad UI state
//! never empties the list.

use crate::collection::{FilterField, FlagField, NumberField, TextField};
use crate::entity::FilterValue;

use super::range::NumericRange;

/// A compiled constraint over one entity.
pub enum FilterPredicate<E> {
    /// No constraint.
    Pass,
    Range {
        field: NumberField<E>,
        range: NumericRange,
    },
    Boolean {
        field: FlagField<E>,
        expected: bool,
    },
    Categorical {
        field: TextField<E>,
        expected: String,
    },
    Service {
        keyword: String,
        expected: bool,
    },
    MinThreshold {
        field: NumberField<E>,
        threshold: f64,
    },
}

impl<E> FilterPredicate<E> {
    /// Builds the predicate for `key` from its declared field and raw value.
    pub fn build(key: &str, field: &FilterField<E>, value: &FilterValue) -> Self {
        let predicate = match field {
            FilterField::Range(field) => value
                .as_text()
                .and_then(NumericRange::parse)
                .map(|range| Self::Range {
                    field: *field,
                    range,
                }),
            FilterField::Boolean(field) => value.as_flag().map(|expected| Self::Boolean {
                field: *field,
                expected,
            }),
            FilterField::CategoricalExact(field) => {
                value.as_text().map(|expected| Self::Categorical {
                    field: *field,
                    expected: expected.to_string(),
                })
            }
            FilterField::ServiceMembership { keyword } => {
                value.as_flag().map(|expected| Self::Service {
                    keyword: keyword.clone(),
                    expected,
                })
            }
            FilterField::MinThreshold(field) => {
                value.as_number().map(|threshold| Self::MinThreshold {
                    field: *field,
                    threshold,
                })
            }
        };

        predicate.unwrap_or_else(|| {
            tracing::debug!(
                key,
                kind = %field.kind(),
                ?value,
                "skipping filter with malformed value"
            );
            Self::Pass
        })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Evaluates the predicate. `services` is the entity's service list as
    /// resolved by the collection config.
    pub fn matches(&self, entity: &E, services: Option<&[String]>) -> bool {
        match self {
            Self::Pass => true,
            Self::Range { field, range } => match field(entity) {
                Some(value) => range.contains(value),
                None => false,
            },
            Self::Boolean { field, expected } => field(entity) == Some(*expected),
            Self::Categorical { field, expected } => field(entity) == Some(expected.as_str()),
            Self::Service { keyword, expected } => {
                services_contain(services.unwrap_or_default(), keyword) == *expected
            }
            Self::MinThreshold { field, threshold } => match field(entity) {
                Some(rating) if !rating.is_nan() => rating >= *threshold,
                _ => false,
            },
        }
    }
}

/// Case-insensitive substring lookup of `keyword` (already lowercase).
fn services_contain(services: &[String], keyword: &str) -> bool {
    services
        .iter()
        .any(|service| service.to_lowercase().contains(keyword))
}

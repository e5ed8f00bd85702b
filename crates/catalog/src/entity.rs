//! Entity identity and filter value types shared by every collection.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A record that can be listed on a discover screen.
pub trait Entity {
    /// Unique identifier of the record.
    fn id(&self) -> &str;
}

/// Value semantics of one filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// `"min-max"` encoded inclusive numeric bounds.
    Range,
    /// Exact equality against a flag.
    Boolean,
    /// Exact equality against a string field.
    CategoricalExact,
    /// Keyword lookup in the record's `services` list.
    ServiceMembership,
    /// Lower bound on a rating.
    MinThreshold,
}

impl FilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Boolean => "boolean",
            Self::CategoricalExact => "categorical-exact",
            Self::ServiceMembership => "service-membership",
            Self::MinThreshold => "min-threshold",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value chosen in the filter UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Numbers, and text that parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(raw) => raw.trim().parse::<f64>().ok()?,
            Self::Flag(_) => return None,
        };
        (!value.is_nan()).then_some(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Filter key to raw value. Absent keys do not constrain the result.
pub type FilterSet = BTreeMap<String, FilterValue>;

/// Review scores attached to airports and airlines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ratings {
    #[serde(deserialize_with = "crate::lenient::number")]
    pub google_rating: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub skytrax_rating: Option<f64>,
}

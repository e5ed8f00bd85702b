//! Range filter parsing and matching.

/// Inclusive numeric bounds decoded from a `"min-max"` filter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    /// Parses `"min-max"`. Returns `None` for anything else, which callers
    /// treat as "no constraint" rather than "match nothing".
    pub fn parse(raw: &str) -> Option<Self> {
        let (min_raw, max_raw) = split_range(raw.trim())?;
        let min = parse_bound(min_raw)?;
        let max = parse_bound(max_raw)?;
        if min > max {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan() && self.min <= value && value <= self.max
    }
}

fn split_range(raw: &str) -> Option<(&str, &str)> {
    let (start, end) = raw.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    let start = start.trim();
    let end = end.trim();
    if start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start, end))
}

fn parse_bound(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(value)
}

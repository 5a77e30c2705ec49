//! Filter engine — narrows a record collection by user-selected criteria.
//!
//! A record passes iff it satisfies every active criterion (logical AND).
//! The source slice is never mutated; the result is a fresh Vec in the
//! original relative order.

use crate::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dropdown values starting with this prefix mean "no filter",
/// e.g. "All Regions", "All Industries".
pub const NO_FILTER_PREFIX: &str = "All ";

/// A single predicate on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Criterion {
    /// Exact match for text fields; containment for set-valued fields.
    Equals(String),
    /// Numeric threshold: `field >= value`.
    AtLeast(f64),
}

impl Criterion {
    /// Inactive criteria are skipped. Only the sentinel (or an empty
    /// dropdown value) deactivates an `Equals`; thresholds are always live.
    pub fn is_active(&self, sentinel_prefix: &str) -> bool {
        match self {
            Criterion::Equals(v) => !(v.is_empty() || v.starts_with(sentinel_prefix)),
            Criterion::AtLeast(_) => true,
        }
    }

    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        match (self, value) {
            (Criterion::Equals(want), Some(FieldValue::Text(have))) => have == want,
            (Criterion::Equals(want), Some(FieldValue::Set(items))) => items.iter().any(|i| i == want),
            (Criterion::AtLeast(min), Some(FieldValue::Number(n))) => *n >= *min,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub criteria:        BTreeMap<String, Criterion>,
    #[serde(default = "default_sentinel")]
    pub sentinel_prefix: String,
}

fn default_sentinel() -> String {
    NO_FILTER_PREFIX.to_string()
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            criteria: BTreeMap::new(),
            sentinel_prefix: default_sentinel(),
        }
    }
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sentinel(mut self, prefix: &str) -> Self {
        self.sentinel_prefix = prefix.to_string();
        self
    }

    /// Categorical criterion, e.g. `("region", "West")` or `("region", "All Regions")`.
    pub fn equals(mut self, field: &str, value: &str) -> Self {
        self.set(field, Criterion::Equals(value.to_string()));
        self
    }

    /// Numeric minimum, e.g. `("margin", 30.0)`.
    pub fn at_least(mut self, field: &str, min: f64) -> Self {
        self.set(field, Criterion::AtLeast(min));
        self
    }

    /// Replace the criterion on `field`. Setting a field twice keeps the last.
    pub fn set(&mut self, field: &str, criterion: Criterion) {
        self.criteria.insert(field.to_string(), criterion);
    }

    pub fn clear(&mut self, field: &str) {
        self.criteria.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.criteria.clear();
    }

    pub fn active(&self) -> impl Iterator<Item = (&String, &Criterion)> {
        self.criteria
            .iter()
            .filter(|(_, c)| c.is_active(&self.sentinel_prefix))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn accepts(&self, record: &Record) -> bool {
        self.active()
            .all(|(field, criterion)| criterion.matches(record.get(field)))
    }
}

/// Records that pass `spec`, in input order.
pub fn filter(records: &[Record], spec: &FilterSpec) -> Vec<Record> {
    let kept: Vec<Record> = records
        .iter()
        .filter(|r| spec.accepts(r))
        .cloned()
        .collect();
    log::debug!("filter kept {} of {} records", kept.len(), records.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_values_are_inactive() {
        assert!(!Criterion::Equals("All Regions".into()).is_active(NO_FILTER_PREFIX));
        assert!(!Criterion::Equals(String::new()).is_active(NO_FILTER_PREFIX));
        assert!(Criterion::Equals("West".into()).is_active(NO_FILTER_PREFIX));
        assert!(Criterion::AtLeast(0.0).is_active(NO_FILTER_PREFIX));
    }

    #[test]
    fn missing_field_fails_active_criterion() {
        let record = Record::new().with("region", "West");
        assert!(!Criterion::AtLeast(10.0).matches(record.get("revenue")));
        assert!(!Criterion::Equals("Retail".into()).matches(record.get("industry")));
    }

    #[test]
    fn custom_sentinel_prefix_is_honoured() {
        let spec = FilterSpec::new().with_sentinel("Any ").equals("region", "Any region");
        assert!(spec.is_empty());
    }
}

//! Generic dashboard rows.
//!
//! Every screen invents its own row shape, so a `Record` is a field-name
//! keyed map of scalar values. The filter, sort and generic aggregation
//! functions work on this shape. The compensation screen has its own typed
//! record in `compensation.rs`.

use crate::compensation::TrackPair;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scalar field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// Set-valued field such as a customer's `segments`.
    Set(Vec<String>),
    /// Small fixed `{ai, user}` mapping.
    Pair(TrackPair),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&[String]> {
        match self {
            FieldValue::Set(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Set(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::Set(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<TrackPair> for FieldValue {
    fn from(pair: TrackPair) -> Self {
        FieldValue::Pair(pair)
    }
}

/// A single dashboard row: field name → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used heavily by seed data and tests.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Returns a new record with `field` replaced. `self` is left untouched.
    pub fn updated(&self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.clone().with(field, value)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn set(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(FieldValue::as_set)
    }
}

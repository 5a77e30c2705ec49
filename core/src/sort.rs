//! Sort engine — orders a record collection by one field.
//!
//! Comparison follows the dashboard comparator: less → before, greater →
//! after, ties → equal. The sort is stable, so equal keys keep their input
//! order.
//!
//! RULE: the comparator must stay a total order. Values of different kinds
//! order by kind (numbers, then text, then everything else), and missing,
//! set-valued and pair fields all compare equal to each other.

use crate::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc  => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key:       String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: &str) -> Self {
        Self { key: key.to_string(), direction: SortDirection::Asc }
    }

    pub fn desc(key: &str) -> Self {
        Self { key: key.to_string(), direction: SortDirection::Desc }
    }

    /// Column-header click: same key flips direction, a new key starts
    /// ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    pub fn reversed(&self) -> Self {
        Self { key: self.key.clone(), direction: self.direction.flipped() }
    }
}

fn kind_rank(value: Option<&FieldValue>) -> u8 {
    match value {
        Some(FieldValue::Number(_)) => 0,
        Some(FieldValue::Text(_))   => 1,
        _                           => 2,
    }
}

/// Native ordering of two field values.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => x.total_cmp(y),
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// A sorted copy of `records`.
pub fn sort(records: &[Record], spec: &SortSpec) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_values(a.get(&spec.key), b.get(&spec.key));
        match spec.direction {
            SortDirection::Asc  => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

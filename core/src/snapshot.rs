//! Version snapshots — one entry per save in a resolver's history.
//!
//! An entry captures everything needed to restore the screen: a deep copy
//! of every record plus the totals of every known scenario at save time.
//! Entries are immutable once appended.

use crate::{
    aggregator::Totals,
    compensation::EmployeeRecord,
    error::DeskResult,
    types::{ScenarioName, VersionNumber},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version:         VersionNumber,
    pub version_id:      Uuid,
    pub saved_at:        DateTime<Utc>,
    pub label:           Option<String>,
    pub active_scenario: ScenarioName,
    pub records:         Vec<EmployeeRecord>,
    pub totals:          BTreeMap<ScenarioName, Totals>,
}

impl VersionEntry {
    /// Serialized form handed to the export collaborator.
    pub fn to_json(&self) -> DeskResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> DeskResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Light summary for history listings; skips the record copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version:         VersionNumber,
    pub saved_at:        DateTime<Utc>,
    pub label:           Option<String>,
    pub active_scenario: ScenarioName,
    pub record_count:    usize,
}

impl From<&VersionEntry> for VersionSummary {
    fn from(entry: &VersionEntry) -> Self {
        Self {
            version:         entry.version,
            saved_at:        entry.saved_at,
            label:           entry.label.clone(),
            active_scenario: entry.active_scenario.clone(),
            record_count:    entry.records.len(),
        }
    }
}

//! Resolver events — what happened on each scenario transition.
//!
//! The resolver queues events; the caller drains them with
//! `ScenarioResolver::take_events()` and logs or forwards them.
//! Variants are only appended, never reordered.

use crate::{
    compensation::InputField,
    types::{RecordId, ScenarioName, VersionNumber},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    // ── Editing ────────────────────────────────────
    RecordEdited {
        scenario:  ScenarioName,
        record_id: RecordId,
        field:     InputField,
        value:     f64,
    },
    EditsDiscarded {
        scenario: ScenarioName,
    },

    // ── Scenario selection ─────────────────────────
    ScenarioSwitched {
        from: ScenarioName,
        to:   ScenarioName,
    },
    /// A switch was requested with unsaved edits and awaits confirmation.
    SwitchHeld {
        active:    ScenarioName,
        requested: ScenarioName,
    },
    SwitchCancelled {
        requested: ScenarioName,
    },
    ScenarioAdded {
        name: ScenarioName,
    },

    // ── Version history ────────────────────────────
    VersionSaved {
        version:  VersionNumber,
        scenario: ScenarioName,
    },
    VersionRestored {
        version: VersionNumber,
    },

    // ── Import ─────────────────────────────────────
    ImportMerged {
        scenario: ScenarioName,
        updated:  usize,
        skipped:  usize,
    },
}

impl DeskEvent {
    /// Stable string name for log lines and the IPC stream.
    pub fn type_name(&self) -> &'static str {
        match self {
            DeskEvent::RecordEdited { .. }     => "record_edited",
            DeskEvent::EditsDiscarded { .. }   => "edits_discarded",
            DeskEvent::ScenarioSwitched { .. } => "scenario_switched",
            DeskEvent::SwitchHeld { .. }       => "switch_held",
            DeskEvent::SwitchCancelled { .. }  => "switch_cancelled",
            DeskEvent::ScenarioAdded { .. }    => "scenario_added",
            DeskEvent::VersionSaved { .. }     => "version_saved",
            DeskEvent::VersionRestored { .. }  => "version_restored",
            DeskEvent::ImportMerged { .. }     => "import_merged",
        }
    }
}

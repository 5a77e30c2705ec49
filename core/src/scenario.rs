//! Scenario resolver — active-scenario selection for the compensation
//! budgeting screen.
//!
//! STATES:
//!   Viewing(s)  — working copy equals the last-saved copy
//!   Editing(s)  — working copy has unsaved edits (dirty)
//!
//! TRANSITIONS:
//!   Viewing(s) --edit/import-----------> Editing(s)
//!   Viewing(s) --switch(s')------------> Viewing(s')
//!   Editing(s) --switch(s'), unconfirmed-> Editing(s)   (no-op)
//!   Editing(s) --switch(s'), confirmed--> Viewing(s')  (edits discarded)
//!   Editing(s) --save------------------> Viewing(s)    (+1 history entry)
//!   any        --restore(v)------------> Viewing(s)    (records := v.records)
//!
//! RULES:
//!   - The working copy and the last-saved copy never alias; every hand-off
//!     between them is an explicit clone.
//!   - History is append-only. Nothing here removes an entry.
//!   - Totals are recomputed on demand, never cached.

use crate::{
    aggregator::{compute_totals, compute_variance, totals_by_scenario, Totals, Variance},
    clock::{Clock, SystemClock},
    compensation::{EmployeeRecord, InputField, Track},
    config::DeskConfig,
    error::{DeskError, DeskResult},
    event::DeskEvent,
    import::{merge_rows, parse_number, ImportHeaders, ImportSummary},
    snapshot::{VersionEntry, VersionSummary},
    types::{ImportRow, ScenarioName, VersionNumber},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "scenario", rename_all = "snake_case")]
pub enum ResolverState {
    Viewing(ScenarioName),
    Editing(ScenarioName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchOutcome {
    Switched,
    /// Requested scenario is already active.
    AlreadyActive,
    /// Unsaved edits exist; nothing changed.
    NeedsConfirmation,
}

pub struct ScenarioResolver {
    scenarios:      Vec<ScenarioName>,
    active:         ScenarioName,
    records:        Vec<EmployeeRecord>,
    saved:          Vec<EmployeeRecord>,
    dirty:          bool,
    pending_switch: Option<ScenarioName>,
    history:        Vec<VersionEntry>,
    events:         Vec<DeskEvent>,
    headers:        ImportHeaders,
    clock:          Box<dyn Clock>,
}

impl ScenarioResolver {
    pub fn new(
        records: Vec<EmployeeRecord>,
        scenarios: Vec<ScenarioName>,
        active: &str,
    ) -> DeskResult<Self> {
        if !scenarios.iter().any(|s| s == active) {
            return Err(DeskError::ScenarioNotFound { name: active.to_string() });
        }
        Ok(Self {
            scenarios,
            active: active.to_string(),
            saved: records.clone(),
            records,
            dirty: false,
            pending_switch: None,
            history: Vec::new(),
            events: Vec::new(),
            headers: ImportHeaders::default(),
            clock: Box::new(SystemClock),
        })
    }

    /// Build from config: its scenario list, default scenario and import headers.
    pub fn from_config(config: &DeskConfig, records: Vec<EmployeeRecord>) -> DeskResult<Self> {
        let mut resolver = Self::new(records, config.scenarios.clone(), &config.default_scenario)?;
        resolver.headers = config.import_headers.clone();
        Ok(resolver)
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ── Queries ────────────────────────────────────────────────

    pub fn state(&self) -> ResolverState {
        if self.dirty {
            ResolverState::Editing(self.active.clone())
        } else {
            ResolverState::Viewing(self.active.clone())
        }
    }

    pub fn active_scenario(&self) -> &str {
        &self.active
    }

    pub fn scenarios(&self) -> &[ScenarioName] {
        &self.scenarios
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending_switch(&self) -> Option<&str> {
        self.pending_switch.as_deref()
    }

    pub fn history(&self) -> &[VersionEntry] {
        &self.history
    }

    pub fn history_summary(&self) -> Vec<VersionSummary> {
        self.history.iter().map(VersionSummary::from).collect()
    }

    /// Totals of the active scenario over the working copy.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.records, Some(&self.active))
    }

    pub fn totals_for(&self, scenario: &str) -> DeskResult<Totals> {
        self.require_known(scenario)?;
        Ok(compute_totals(&self.records, Some(scenario)))
    }

    pub fn all_totals(&self) -> BTreeMap<ScenarioName, Totals> {
        totals_by_scenario(&self.records, &self.scenarios)
    }

    /// Planned (user) versus suggested (ai) spend for the active scenario.
    pub fn variance(&self) -> Variance {
        let totals = self.totals();
        compute_variance(&totals, &totals)
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<DeskEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Editing ────────────────────────────────────────────────

    /// Set the user value of `field` for `record_id` in the active scenario.
    pub fn edit(&mut self, record_id: &str, field: InputField, value: f64) -> DeskResult<()> {
        let scenario = self.active.clone();
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| DeskError::RecordNotFound { id: record_id.to_string() })?;

        record
            .inputs_mut(&scenario)
            .field_mut(field)
            .set(Track::User, value);
        self.dirty = true;
        self.events.push(DeskEvent::RecordEdited {
            scenario,
            record_id: record_id.to_string(),
            field,
            value,
        });
        Ok(())
    }

    /// Like `edit`, from raw input-box text. Malformed text becomes 0.
    pub fn edit_text(&mut self, record_id: &str, field: InputField, raw: &str) -> DeskResult<()> {
        self.edit(record_id, field, parse_number(raw))
    }

    /// Revert the working copy to the last-saved copy. A held switch is
    /// dropped with the edits it was guarding.
    pub fn discard_edits(&mut self) {
        self.cancel_switch();
        if !self.dirty {
            return;
        }
        self.records = self.saved.clone();
        self.dirty = false;
        self.events.push(DeskEvent::EditsDiscarded { scenario: self.active.clone() });
        log::info!("discarded unsaved edits to '{}'", self.active);
    }

    /// Merge spreadsheet rows into the user track of the active scenario.
    pub fn merge_import(&mut self, rows: &[ImportRow]) -> ImportSummary {
        let summary = merge_rows(&mut self.records, &self.active, rows, &self.headers);
        if summary.updated > 0 {
            self.dirty = true;
        }
        self.events.push(DeskEvent::ImportMerged {
            scenario: self.active.clone(),
            updated: summary.updated,
            skipped: summary.skipped,
        });
        log::info!(
            "import into '{}': {} rows merged, {} skipped",
            self.active,
            summary.updated,
            summary.skipped
        );
        summary
    }

    // ── Scenario selection ─────────────────────────────────────

    /// Register a new scenario. Existing records are not backfilled.
    pub fn add_scenario(&mut self, name: &str) -> DeskResult<()> {
        if self.scenarios.iter().any(|s| s == name) {
            return Err(DeskError::ScenarioExists { name: name.to_string() });
        }
        self.scenarios.push(name.to_string());
        self.events.push(DeskEvent::ScenarioAdded { name: name.to_string() });
        Ok(())
    }

    /// One-shot switch. While dirty, only a confirmed switch goes through;
    /// an unconfirmed one leaves everything as it was.
    pub fn switch_scenario(&mut self, target: &str, confirmed: bool) -> DeskResult<SwitchOutcome> {
        self.require_known(target)?;
        if target == self.active {
            return Ok(SwitchOutcome::AlreadyActive);
        }
        if self.dirty && !confirmed {
            return Ok(SwitchOutcome::NeedsConfirmation);
        }
        self.discard_edits();
        self.activate(target);
        Ok(SwitchOutcome::Switched)
    }

    /// Dropdown selection. While dirty, the request is held until
    /// `confirm_switch` or `cancel_switch`. Picking the active scenario
    /// again drops any held request.
    pub fn request_switch(&mut self, target: &str) -> DeskResult<SwitchOutcome> {
        let outcome = self.switch_scenario(target, false)?;
        match outcome {
            SwitchOutcome::NeedsConfirmation => {
                self.pending_switch = Some(target.to_string());
                self.events.push(DeskEvent::SwitchHeld {
                    active: self.active.clone(),
                    requested: target.to_string(),
                });
            }
            SwitchOutcome::AlreadyActive => self.cancel_switch(),
            SwitchOutcome::Switched => {}
        }
        Ok(outcome)
    }

    /// Accept the held switch: unsaved edits are discarded.
    pub fn confirm_switch(&mut self) -> DeskResult<SwitchOutcome> {
        let target = self.pending_switch.take().ok_or(DeskError::NoPendingSwitch)?;
        self.switch_scenario(&target, true)
    }

    /// Decline the held switch; the resolver stays as it was.
    pub fn cancel_switch(&mut self) {
        if let Some(requested) = self.pending_switch.take() {
            self.events.push(DeskEvent::SwitchCancelled { requested });
        }
    }

    // ── Version history ────────────────────────────────────────

    /// Commit the working copy and append one history entry with totals for
    /// every known scenario.
    pub fn save(&mut self, label: Option<&str>) -> &VersionEntry {
        self.saved = self.records.clone();
        self.dirty = false;
        self.pending_switch = None;

        let version = self.history.len() as VersionNumber + 1;
        let entry = VersionEntry {
            version,
            version_id: Uuid::new_v4(),
            saved_at: self.clock.now(),
            label: label.map(String::from),
            active_scenario: self.active.clone(),
            records: self.records.clone(),
            totals: self.all_totals(),
        };
        log::info!(
            "saved version {version} ({} records, active '{}')",
            entry.records.len(),
            self.active
        );
        self.events.push(DeskEvent::VersionSaved { version, scenario: self.active.clone() });
        self.history.push(entry);
        &self.history[self.history.len() - 1]
    }

    /// Replace the working copy with a saved version's records.
    /// The active scenario is kept.
    pub fn restore_version(&mut self, version: VersionNumber) -> DeskResult<()> {
        let entry = self
            .history
            .iter()
            .find(|e| e.version == version)
            .ok_or(DeskError::VersionNotFound { version })?;

        self.records = entry.records.clone();
        self.saved = entry.records.clone();
        self.dirty = false;
        self.pending_switch = None;
        self.events.push(DeskEvent::VersionRestored { version });
        log::info!("restored version {version}");
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────────

    fn require_known(&self, scenario: &str) -> DeskResult<()> {
        if self.scenarios.iter().any(|s| s == scenario) {
            Ok(())
        } else {
            Err(DeskError::ScenarioNotFound { name: scenario.to_string() })
        }
    }

    fn activate(&mut self, target: &str) {
        let from = std::mem::replace(&mut self.active, target.to_string());
        self.pending_switch = None;
        log::info!("scenario switched '{from}' -> '{target}'");
        self.events.push(DeskEvent::ScenarioSwitched { from, to: target.to_string() });
    }
}

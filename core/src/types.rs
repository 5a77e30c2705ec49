//! Shared primitive types used across the dashboard metrics library.

/// Stable identifier of a record (employee id, customer id, expense line).
pub type RecordId = String;

/// Name of a what-if scenario, e.g. "Baseline".
pub type ScenarioName = String;

/// Monotonic version number in a resolver's save history. Starts at 1.
pub type VersionNumber = u32;

/// Header-keyed row handed over by the spreadsheet import collaborator.
pub type ImportRow = std::collections::BTreeMap<String, String>;

//! Aggregator — folds record collections into totals and derived ratios.
//!
//! RULE: every function here is pure. Inputs are borrowed, outputs are new
//! values, and nothing is cached. Callers recompute after every change to
//! records, active scenario, or filters.
//!
//! Two families live here:
//!   1. Compensation totals (`compute_totals`, `compute_variance`) for the
//!      scenario-driven budgeting screen.
//!   2. Generic record folds (`sum_field`, `group_totals`, percentage
//!      helpers) behind the KPI cards of the other screens.

use crate::{
    compensation::{quarter_breakdown, EmployeeRecord, QuarterBreakdown, Track},
    record::{FieldValue, Record},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Compensation totals ──────────────────────────────────────────────────────

/// Quarterly sums for one track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackTotals {
    pub salary:   f64,
    pub bonus:    f64,
    pub benefits: f64,
    pub total:    f64,
    pub m1:       f64,
    pub m2:       f64,
    pub m3:       f64,
}

impl TrackTotals {
    fn accumulate(&mut self, b: &QuarterBreakdown) {
        self.salary   += b.salary;
        self.bonus    += b.bonus;
        self.benefits += b.benefits;
        self.total    += b.quarterly_total;
        self.m1       += b.m1;
        self.m2       += b.m2;
        self.m3       += b.m3;
    }
}

/// Totals for both tracks over every record in scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub ai:   TrackTotals,
    pub user: TrackTotals,
}

impl Totals {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn track(&self, track: Track) -> &TrackTotals {
        match track {
            Track::Ai   => &self.ai,
            Track::User => &self.user,
        }
    }

    fn track_mut(&mut self, track: Track) -> &mut TrackTotals {
        match track {
            Track::Ai   => &mut self.ai,
            Track::User => &mut self.user,
        }
    }
}

/// Fold `records` into quarterly totals for `scenario`.
///
/// Records missing the scenario contribute zero to every field. `None` or an
/// empty slice yields all-zero totals.
pub fn compute_totals(records: &[EmployeeRecord], scenario: Option<&str>) -> Totals {
    let mut totals = Totals::zero();
    let Some(scenario) = scenario else {
        return totals;
    };

    for record in records {
        let Some(inputs) = record.scenarios.get(scenario) else {
            continue;
        };
        for track in Track::BOTH {
            let b = quarter_breakdown(record.current_salary, inputs, track);
            totals.track_mut(track).accumulate(&b);
        }
    }

    log::debug!(
        "totals for '{scenario}' over {} records: ai={:.2} user={:.2}",
        records.len(),
        totals.ai.total,
        totals.user.total
    );
    totals
}

/// One employee's breakdown for `scenario` on `track`, zero when the
/// record has no entry for the scenario.
pub fn breakdown(record: &EmployeeRecord, scenario: &str, track: Track) -> QuarterBreakdown {
    match record.scenarios.get(scenario) {
        Some(inputs) => quarter_breakdown(record.current_salary, inputs, track),
        None         => QuarterBreakdown::default(),
    }
}

/// Totals for each named scenario, keyed by name.
pub fn totals_by_scenario<S: AsRef<str>>(
    records: &[EmployeeRecord],
    scenarios: &[S],
) -> BTreeMap<String, Totals> {
    scenarios
        .iter()
        .map(|s| (s.as_ref().to_string(), compute_totals(records, Some(s.as_ref()))))
        .collect()
}

// ── Variance ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceSign {
    /// Planned (user) spend exceeds the suggested (ai) spend.
    Over,
    Under,
    Even,
}

/// Signed difference between two totals. Formatting is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variance {
    pub amount: f64,
    pub sign:   VarianceSign,
}

impl Variance {
    /// `user_total - ai_total`.
    pub fn between(user_total: f64, ai_total: f64) -> Self {
        let amount = user_total - ai_total;
        let sign = if amount > 0.0 {
            VarianceSign::Over
        } else if amount < 0.0 {
            VarianceSign::Under
        } else {
            VarianceSign::Even
        };
        Self { amount, sign }
    }

    /// Variance as a percentage of the ai total; 0 when that total is 0.
    pub fn pct_of(&self, ai_total: f64) -> f64 {
        share_pct(self.amount, ai_total)
    }
}

/// `a.user.total - b.ai.total`.
pub fn compute_variance(a: &Totals, b: &Totals) -> Variance {
    Variance::between(a.user.total, b.ai.total)
}

// ── Generic record folds ─────────────────────────────────────────────────────

/// Count and sum of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub count: usize,
    pub sum:   f64,
}

impl GroupTotal {
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Sum of a numeric field. Records without the field add nothing.
pub fn sum_field(records: &[Record], field: &str) -> f64 {
    records.iter().filter_map(|r| r.number(field)).sum()
}

/// Mean of a numeric field over the records that have it.
pub fn mean_field(records: &[Record], field: &str) -> f64 {
    let (n, sum) = records
        .iter()
        .filter_map(|r| r.number(field))
        .fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + v));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Group records by `group_field` and total `value_field` per group.
///
/// Text groups by value. Set-valued fields count the record once in every
/// member group. Records lacking the group field are left out.
pub fn group_totals(
    records: &[Record],
    group_field: &str,
    value_field: &str,
) -> BTreeMap<String, GroupTotal> {
    let mut groups: BTreeMap<String, GroupTotal> = BTreeMap::new();
    for record in records {
        let value = record.number(value_field).unwrap_or(0.0);
        let keys: Vec<&str> = match record.get(group_field) {
            Some(FieldValue::Text(s)) => vec![s.as_str()],
            Some(FieldValue::Set(items)) => items.iter().map(String::as_str).collect(),
            _ => continue,
        };
        for key in keys {
            let entry = groups.entry(key.to_string()).or_default();
            entry.count += 1;
            entry.sum += value;
        }
    }
    groups
}

/// `part / whole × 100`, or 0 when `whole` is 0.
pub fn share_pct(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Used capacity as a percentage, e.g. IT licence or budget utilization.
pub fn utilization_pct(used: f64, capacity: f64) -> f64 {
    share_pct(used, capacity)
}

/// Period-over-period change in percent; 0 when `previous` is 0.
pub fn pct_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous.abs() * 100.0
    }
}

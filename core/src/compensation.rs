//! Compensation budgeting model — employees, per-scenario inputs, and the
//! quarterly cost breakdown.
//!
//! Every input exists on two tracks: `ai` (the suggested value shipped with
//! the seed data) and `user` (what the planner typed). Both tracks are
//! computed independently with the same formula.
//!
//! RULE: a record that has no entry for a scenario contributes zero to every
//! total. Editing such a record creates a zeroed entry on first touch, so
//! new scenarios never require backfilling existing records.

use crate::types::{RecordId, ScenarioName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which of the two value tracks to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Ai,
    User,
}

impl Track {
    pub const BOTH: [Track; 2] = [Track::Ai, Track::User];
}

/// An `{ai, user}` value pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPair {
    pub ai:   f64,
    pub user: f64,
}

impl TrackPair {
    pub const ZERO: TrackPair = TrackPair { ai: 0.0, user: 0.0 };

    pub fn new(ai: f64, user: f64) -> Self {
        Self { ai, user }
    }

    /// Both tracks start out equal when a planner hasn't touched the value.
    pub fn same(value: f64) -> Self {
        Self { ai: value, user: value }
    }

    pub fn get(&self, track: Track) -> f64 {
        match track {
            Track::Ai   => self.ai,
            Track::User => self.user,
        }
    }

    pub fn set(&mut self, track: Track, value: f64) {
        match track {
            Track::Ai   => self.ai = value,
            Track::User => self.user = value,
        }
    }
}

/// The editable inputs of one employee under one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    pub raise_percentage: TrackPair,
    pub bonus:            TrackPair,
    pub monthly_benefits: TrackPair,
}

impl ScenarioInputs {
    pub const ZERO: ScenarioInputs = ScenarioInputs {
        raise_percentage: TrackPair::ZERO,
        bonus:            TrackPair::ZERO,
        monthly_benefits: TrackPair::ZERO,
    };

    pub fn field(&self, field: InputField) -> &TrackPair {
        match field {
            InputField::RaisePercentage => &self.raise_percentage,
            InputField::Bonus           => &self.bonus,
            InputField::MonthlyBenefits => &self.monthly_benefits,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut TrackPair {
        match field {
            InputField::RaisePercentage => &mut self.raise_percentage,
            InputField::Bonus           => &mut self.bonus,
            InputField::MonthlyBenefits => &mut self.monthly_benefits,
        }
    }
}

/// Names the editable columns of the compensation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    RaisePercentage,
    Bonus,
    MonthlyBenefits,
}

impl InputField {
    pub const ALL: [InputField; 3] =
        [InputField::RaisePercentage, InputField::Bonus, InputField::MonthlyBenefits];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id:             RecordId,
    pub name:           String,
    #[serde(default)]
    pub department:     Option<String>,
    #[serde(default)]
    pub role:           Option<String>,
    pub current_salary: f64,
    /// Scenario name → inputs. Serialized inline, so a record reads
    /// `{"id": .., "currentSalary": .., "Baseline": {..}, "Best Case": {..}}`.
    #[serde(flatten)]
    pub scenarios:      BTreeMap<ScenarioName, ScenarioInputs>,
}

impl EmployeeRecord {
    pub fn new(id: &str, name: &str, current_salary: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            department: None,
            role: None,
            current_salary,
            scenarios: BTreeMap::new(),
        }
    }

    pub fn with_scenario(mut self, scenario: &str, inputs: ScenarioInputs) -> Self {
        self.scenarios.insert(scenario.to_string(), inputs);
        self
    }

    /// Inputs for `scenario`, or the zeroed default when the record has none.
    pub fn inputs(&self, scenario: &str) -> &ScenarioInputs {
        self.scenarios.get(scenario).unwrap_or(&ScenarioInputs::ZERO)
    }

    /// Mutable inputs for `scenario`, created zeroed on first touch.
    pub fn inputs_mut(&mut self, scenario: &str) -> &mut ScenarioInputs {
        self.scenarios.entry(scenario.to_string()).or_default()
    }
}

/// One employee's cost for one quarter on one track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterBreakdown {
    pub new_annual_salary: f64,
    pub monthly_salary:    f64,
    /// Salary paid over the quarter (three monthly salaries).
    pub salary:            f64,
    pub bonus:             f64,
    /// Benefits paid over the quarter (three monthly payments).
    pub benefits:          f64,
    pub m1:                f64,
    pub m2:                f64,
    pub m3:                f64,
    pub quarterly_total:   f64,
}

/// The quarterly formula. Bonus lands in month 1 only.
pub fn quarter_breakdown(current_salary: f64, inputs: &ScenarioInputs, track: Track) -> QuarterBreakdown {
    let raise = inputs.raise_percentage.get(track);
    let bonus = inputs.bonus.get(track);
    let monthly_benefits = inputs.monthly_benefits.get(track);

    let new_annual_salary = current_salary * (1.0 + raise / 100.0);
    let monthly_salary = new_annual_salary / 12.0;

    let m1 = monthly_salary + bonus + monthly_benefits;
    let m2 = monthly_salary + monthly_benefits;
    let m3 = m2;

    QuarterBreakdown {
        new_annual_salary,
        monthly_salary,
        salary: monthly_salary * 3.0,
        bonus,
        benefits: monthly_benefits * 3.0,
        m1,
        m2,
        m3,
        quarterly_total: m1 + 2.0 * m2,
    }
}

//! Spreadsheet import merge.
//!
//! The import collaborator parses an uploaded sheet into header-keyed rows.
//! This module matches each row to an employee by name and overwrites the
//! `user` track of the active scenario. The `ai` track is never touched.
//!
//! Rows that match no employee, or carry none of the value columns, are
//! skipped without error. The returned summary carries the skip count so
//! callers can surface it if they choose.

use crate::{
    compensation::{EmployeeRecord, InputField, Track},
    types::ImportRow,
};
use serde::{Deserialize, Serialize};

/// Column headers the merge reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportHeaders {
    pub employee_name:    String,
    pub raise_percentage: String,
    pub bonus:            String,
    pub monthly_benefits: String,
}

impl Default for ImportHeaders {
    fn default() -> Self {
        Self {
            employee_name:    "Employee Name".into(),
            raise_percentage: "Raise % (User)".into(),
            bonus:            "Bonus (User)".into(),
            monthly_benefits: "Monthly Benefits (User)".into(),
        }
    }
}

impl ImportHeaders {
    fn column(&self, field: InputField) -> &str {
        match field {
            InputField::RaisePercentage => &self.raise_percentage,
            InputField::Bonus           => &self.bonus,
            InputField::MonthlyBenefits => &self.monthly_benefits,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Rows that wrote at least one cell.
    pub updated: usize,
    /// Rows with no matching employee, no name, or no value columns.
    pub skipped: usize,
}

/// Coerce user-typed numeric text to a number.
///
/// Currency symbols, thousands separators, percent signs and surrounding
/// whitespace are ignored. Anything unparseable, or non-finite, becomes 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' '))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Merge `rows` into `records` for `scenario`.
///
/// A present-but-malformed cell writes 0; an absent column leaves the value
/// as it was. Names are compared trimmed on both sides, and when several
/// employees share a name the first one wins.
pub fn merge_rows(
    records: &mut [EmployeeRecord],
    scenario: &str,
    rows: &[ImportRow],
    headers: &ImportHeaders,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for row in rows {
        let name = row
            .get(&headers.employee_name)
            .map(|n| n.trim())
            .unwrap_or_default();

        let Some(record) = records
            .iter_mut()
            .find(|r| !name.is_empty() && r.name.trim() == name)
        else {
            log::debug!("import: no employee named '{name}', row skipped");
            summary.skipped += 1;
            continue;
        };

        let cells: Vec<(InputField, f64)> = InputField::ALL
            .into_iter()
            .filter_map(|field| row.get(headers.column(field)).map(|c| (field, parse_number(c))))
            .collect();
        if cells.is_empty() {
            log::debug!("import: row for '{name}' has no value columns, skipped");
            summary.skipped += 1;
            continue;
        }

        let inputs = record.inputs_mut(scenario);
        for (field, value) in cells {
            inputs.field_mut(field).set(Track::User, value);
        }
        summary.updated += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_strips_formatting() {
        assert_eq!(parse_number(" $1,200 "), 1200.0);
        assert_eq!(parse_number("3.5%"), 3.5);
        assert_eq!(parse_number("-2"), -2.0);
    }

    #[test]
    fn parse_number_coerces_garbage_to_zero() {
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }
}

use crate::{
    compensation::InputField,
    filter::Criterion,
    types::{ImportRow, ScenarioName, VersionNumber},
};
use serde::{Deserialize, Serialize};

/// Everything the rendering layer can ask of a dashboard session.
/// Variants are only appended, never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    GetState,

    // ── Profitability table ───────────────────────
    SetFilter {
        field:     String,
        criterion: Criterion,
    },
    ClearFilters,
    Sort {
        key: String,
    },

    // ── Compensation scenarios ────────────────────
    Edit {
        record_id: String,
        field:     InputField,
        /// Raw input-box text; malformed values become 0.
        value:     String,
    },
    SwitchScenario {
        scenario: ScenarioName,
    },
    ConfirmSwitch,
    CancelSwitch,
    DiscardEdits,
    Save {
        #[serde(default)]
        label: Option<String>,
    },
    RestoreVersion {
        version: VersionNumber,
    },
    Import {
        rows: Vec<ImportRow>,
    },

    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> DeskCommand {
        serde_json::from_str(line).unwrap_or_else(|e| panic!("{line}: {e}"))
    }

    #[test]
    fn parses_one_line_per_command() {
        assert_eq!(parse(r#"{"cmd":"get_state"}"#), DeskCommand::GetState);
        assert_eq!(
            parse(r#"{"cmd":"set_filter","field":"region","criterion":{"kind":"equals","value":"Europe"}}"#),
            DeskCommand::SetFilter {
                field: "region".into(),
                criterion: Criterion::Equals("Europe".into()),
            }
        );
        assert_eq!(
            parse(r#"{"cmd":"set_filter","field":"margin","criterion":{"kind":"at_least","value":30}}"#),
            DeskCommand::SetFilter { field: "margin".into(), criterion: Criterion::AtLeast(30.0) }
        );
        assert_eq!(parse(r#"{"cmd":"clear_filters"}"#), DeskCommand::ClearFilters);
        assert_eq!(parse(r#"{"cmd":"sort","key":"revenue"}"#), DeskCommand::Sort { key: "revenue".into() });
        assert_eq!(
            parse(r#"{"cmd":"edit","record_id":"EMP001","field":"raise_percentage","value":"4.5%"}"#),
            DeskCommand::Edit {
                record_id: "EMP001".into(),
                field: InputField::RaisePercentage,
                value: "4.5%".into(),
            }
        );
        assert_eq!(
            parse(r#"{"cmd":"switch_scenario","scenario":"Best Case"}"#),
            DeskCommand::SwitchScenario { scenario: "Best Case".into() }
        );
        assert_eq!(parse(r#"{"cmd":"confirm_switch"}"#), DeskCommand::ConfirmSwitch);
        assert_eq!(parse(r#"{"cmd":"cancel_switch"}"#), DeskCommand::CancelSwitch);
        assert_eq!(parse(r#"{"cmd":"discard_edits"}"#), DeskCommand::DiscardEdits);
        assert_eq!(parse(r#"{"cmd":"save"}"#), DeskCommand::Save { label: None });
        assert_eq!(
            parse(r#"{"cmd":"save","label":"Q3 draft"}"#),
            DeskCommand::Save { label: Some("Q3 draft".into()) }
        );
        assert_eq!(parse(r#"{"cmd":"restore_version","version":2}"#), DeskCommand::RestoreVersion { version: 2 });
        assert_eq!(parse(r#"{"cmd":"quit"}"#), DeskCommand::Quit);

        let DeskCommand::Import { rows } =
            parse(r#"{"cmd":"import","rows":[{"Employee Name":"Sarah Johnson","Bonus (User)":"12,000"}]}"#)
        else {
            panic!("expected import");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Bonus (User)"], "12,000");
    }

    #[test]
    fn serialized_commands_read_back() {
        let cmd = DeskCommand::SetFilter {
            field: "segments".into(),
            criterion: Criterion::Equals("Strategic".into()),
        };
        let line = serde_json::to_string(&cmd).unwrap();
        assert!(line.contains(r#""cmd":"set_filter""#), "{line}");
        assert_eq!(parse(&line), cmd);
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(serde_json::from_str::<DeskCommand>(r#"{"cmd":"reboot"}"#).is_err());
        assert!(serde_json::from_str::<DeskCommand>(r#"{"scenario":"Baseline"}"#).is_err());
    }
}

use crate::{filter::NO_FILTER_PREFIX, import::ImportHeaders};
use serde::{Deserialize, Serialize};

/// Shape of `desk.json`.
#[derive(Debug, Clone, Deserialize)]
struct DeskFile {
    scenarios: Vec<String>,
    default_scenario: Option<String>,
    #[serde(default)]
    filter_sentinel_prefix: Option<String>,
    #[serde(default)]
    import_headers: Option<ImportHeaders>,
    #[serde(default)]
    seed_files: Option<SeedFiles>,
}

/// Seed data file names, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFiles {
    pub employees: String,
    pub customers: String,
}

impl Default for SeedFiles {
    fn default() -> Self {
        Self {
            employees: "employees.json".into(),
            customers: "customers.json".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Known scenarios, in dropdown order.
    pub scenarios: Vec<String>,
    pub default_scenario: String,
    /// Dropdown values with this prefix mean "no filter".
    pub filter_sentinel_prefix: String,
    pub import_headers: ImportHeaders,
    pub seed_files: SeedFiles,
}

impl DeskConfig {
    /// Load from the data/ directory.
    /// In tests, use DeskConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/desk.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: DeskFile = serde_json::from_str(&content)?;
        Self::from_file(file).map_err(|e| anyhow::anyhow!("{path}: {e}"))
    }

    fn from_file(file: DeskFile) -> anyhow::Result<Self> {
        if file.scenarios.is_empty() {
            anyhow::bail!("at least one scenario is required");
        }
        let default_scenario = file
            .default_scenario
            .unwrap_or_else(|| file.scenarios[0].clone());
        if !file.scenarios.contains(&default_scenario) {
            anyhow::bail!("default scenario '{default_scenario}' is not listed in scenarios");
        }
        let filter_sentinel_prefix = file
            .filter_sentinel_prefix
            .unwrap_or_else(|| NO_FILTER_PREFIX.to_string());
        if filter_sentinel_prefix.is_empty() {
            anyhow::bail!("filter_sentinel_prefix must not be empty");
        }
        Ok(Self {
            scenarios: file.scenarios,
            default_scenario,
            filter_sentinel_prefix,
            import_headers: file.import_headers.unwrap_or_default(),
            seed_files: file.seed_files.unwrap_or_default(),
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            scenarios: vec!["Baseline".into(), "Best Case".into(), "Worst Case".into()],
            default_scenario: "Baseline".into(),
            filter_sentinel_prefix: NO_FILTER_PREFIX.into(),
            import_headers: ImportHeaders::default(),
            seed_files: SeedFiles::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_falls_back_to_first_listed() {
        let file: DeskFile =
            serde_json::from_str(r#"{ "scenarios": ["Plan A", "Plan B"], "default_scenario": null }"#)
                .unwrap();
        let config = DeskConfig::from_file(file).unwrap();
        assert_eq!(config.default_scenario, "Plan A");
        assert_eq!(config.filter_sentinel_prefix, "All ");
        assert_eq!(config.import_headers.employee_name, "Employee Name");
    }

    #[test]
    fn unknown_default_scenario_is_rejected() {
        let file: DeskFile =
            serde_json::from_str(r#"{ "scenarios": ["Plan A"], "default_scenario": "Plan Z" }"#)
                .unwrap();
        assert!(DeskConfig::from_file(file).is_err());
    }

    #[test]
    fn empty_sentinel_prefix_is_rejected() {
        let file: DeskFile = serde_json::from_str(
            r#"{ "scenarios": ["Plan A"], "default_scenario": null, "filter_sentinel_prefix": "" }"#,
        )
        .unwrap();
        assert!(DeskConfig::from_file(file).is_err());
    }

    #[test]
    fn empty_scenario_list_is_rejected() {
        let file: DeskFile =
            serde_json::from_str(r#"{ "scenarios": [], "default_scenario": null }"#).unwrap();
        assert!(DeskConfig::from_file(file).is_err());
    }
}

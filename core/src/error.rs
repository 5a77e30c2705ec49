use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Scenario '{name}' not found")]
    ScenarioNotFound { name: String },

    #[error("Scenario '{name}' already exists")]
    ScenarioExists { name: String },

    #[error("Record '{id}' not found")]
    RecordNotFound { id: String },

    #[error("Version {version} not found in history")]
    VersionNotFound { version: u32 },

    #[error("No scenario switch is awaiting confirmation")]
    NoPendingSwitch,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;

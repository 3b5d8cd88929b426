use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No stored profile for user '{0}'; please set your preferences first")]
    MissingProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PlanError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PlanError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;

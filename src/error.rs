//! Run-level errors
//!
//! Every failure is load-time or setup-time and fatal to the run. Once the
//! transcript and collaborators are validated the core components cannot fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input not available at '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode JSON from '{}': {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("linguistic resource unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("could not write report to '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// Stable code string (for logging and exit reporting)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputUnavailable { .. } => "E001_INPUT_UNAVAILABLE",
            Self::InputMalformed { .. } => "E002_INPUT_MALFORMED",
            Self::CollaboratorUnavailable(_) => "E003_COLLABORATOR_UNAVAILABLE",
            Self::Config(_) => "E004_CONFIG",
            Self::InvalidConfig(_) => "E005_INVALID_CONFIG",
            Self::Output { .. } => "E006_OUTPUT",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

//! Error types for the collection and scoring pipeline.

use thiserror::Error;

use crate::registry::Subsystem;

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("{subsystem}: required tool '{executable}' not found (install package '{package}')")]
    ToolUnavailable {
        subsystem: Subsystem,
        executable: String,
        package: String,
    },

    #[error("Package installation failed: {0}")]
    InstallFailure(String),

    #[error("Parse error in {source_name} output: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoctorError {
    pub fn parse(source_name: &str, reason: impl Into<String>) -> Self {
        DoctorError::Parse {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DoctorError>;

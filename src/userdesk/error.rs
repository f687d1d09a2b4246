use crate::model::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserdeskError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid user data: {}", .0.problems().join(", "))]
    ValidationFailed(ValidationReport),

    #[error("Store unavailable at {}: {reason}", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", .path.display())]
    PersistenceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UserdeskError>;

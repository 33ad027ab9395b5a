//! Error types for splitpair-core.

use std::path::PathBuf;

use thiserror::Error;


/// Failures reading or validating pairing settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error in settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error in settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid settings: {0}")]
    Validation(String),
}


/// Failures reported by the host editor. Never retried.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("host rejected {operation}: {reason}")]
    Rejected { operation: String, reason: String },

    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
    #[error("failed to read session file {}: {source}", .path.display())]
    SessionRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to remove session file {}: {source}", .path.display())]
    SessionRemove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("session file {} is malformed: {source}", .path.display())]
    SessionFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl InfraError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}

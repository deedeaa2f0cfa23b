//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// Agent logic failed while producing an answer
    #[error("Agent error: {0}")]
    Agent(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentError {
    /// True when the error is a missing file rather than a hard failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgentError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

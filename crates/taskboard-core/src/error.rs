use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    /// Rejected locally before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server rejected a mutation; carries its message verbatim.
    #[error("{0}")]
    Gateway(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskboardError::Validation(_))
    }

    /// Text suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            TaskboardError::Validation(msg) | TaskboardError::Gateway(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for TaskboardError {
    fn from(err: serde_json::Error) -> Self {
        TaskboardError::Serialization(err.to_string())
    }
}

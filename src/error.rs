use crate::community::CommunityKind;
use std::fmt::Display;

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add a simple string context to the error with a specific error variant
    fn crier_transport_err(self, msg: impl Display) -> std::result::Result<T, CrierError>;

    fn crier_response_err(self, msg: impl Display) -> std::result::Result<T, CrierError>;
}

impl<T, E: Display> ErrorContext<T> for std::result::Result<T, E> {
    fn crier_transport_err(self, msg: impl Display) -> std::result::Result<T, CrierError> {
        self.map_err(|e| CrierError::Transport(format!("{msg}: {e}")))
    }

    fn crier_response_err(self, msg: impl Display) -> std::result::Result<T, CrierError> {
        self.map_err(|e| CrierError::InvalidResponse(format!("{msg}: {e}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CrierError {
    /// A required command option was absent or empty; raised before any I/O
    #[error("Missing required option {0}")]
    MissingOption(&'static str),

    #[error("Unsupported community type '{0}'")]
    UnsupportedType(String),

    /// Network-level failure, or a non-success HTTP status
    #[error("Network error: {0}")]
    Transport(String),

    /// Response body absent, malformed, or missing the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Well-formed envelope whose `ok` flag was not true
    #[error("Request failed: {0}")]
    Remote(String),

    #[error("Unknown {kind} '{name}'")]
    TargetNotFound { kind: CommunityKind, name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CrierError {
    fn from(err: reqwest::Error) -> Self {
        CrierError::Transport(err.to_string())
    }
}

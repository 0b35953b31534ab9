//! Error types.

use thiserror::Error;

/// Result alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Errors returned by lookup operations.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The subprocess could not be spawned or its output could not be read.
    #[error("process error: {0}")]
    Process(#[from] std::io::Error),

    /// The lookup tool ran but exited with a failure status.
    #[error("lookup tool exited with {status}")]
    ToolFailed {
        /// The exit status reported by the tool.
        status: std::process::ExitStatus,
    },

    /// The configured lookup tool binary does not exist.
    #[error("lookup tool not found: {path}")]
    ToolNotFound {
        /// The path that was checked.
        path: String,
    },
}

impl LookupError {
    /// Returns `true` if the error means the tool binary is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Process(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::ToolNotFound { .. } => true,
            Self::ToolFailed { .. } => false,
        }
    }
}

use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("History query failed: {0}")]
    History(String),

    #[error("Command '{command}' timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a history query error with context
    pub fn history(msg: impl Into<String>) -> Self {
        ReleaseNotesError::History(msg.into())
    }

    /// Create a timeout error for a command that did not finish in time
    pub fn timeout(command: impl Into<String>, secs: u64) -> Self {
        ReleaseNotesError::Timeout {
            command: command.into(),
            secs,
        }
    }

    /// Whether this error came from a query that ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, ReleaseNotesError::Timeout { .. })
    }
}

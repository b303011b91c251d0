use std::fmt;

/// Warnings raised at the edges of the available history.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag precedes HEAD, so the range starts at the root commit
    NoPreviousTag { root_commit: String, reason: String },
    /// A history query ran past its time limit
    QueryTimedOut { query: String, secs: u64 },
    /// Listing commits failed; the notes are rendered without them
    CommitListingFailed { range: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPreviousTag {
                root_commit,
                reason,
            } => {
                write!(
                    f,
                    "No previous tag found ({}); using root commit {}",
                    reason, root_commit
                )
            }
            BoundaryWarning::QueryTimedOut { query, secs } => {
                write!(f, "History query '{}' timed out after {}s", query, secs)
            }
            BoundaryWarning::CommitListingFailed { range, reason } => {
                write!(f, "Error getting commits for {}: {}", range, reason)
            }
        }
    }
}

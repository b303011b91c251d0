//! Version-control history abstraction layer
//!
//! The release-notes pipeline only ever asks the repository three read-only
//! questions, captured by the [History] trait. Implementations:
//!
//! - [repository::Git2History]: in-process queries through the `git2` crate
//! - [cli::GitCli]: `git` subprocesses bounded by a timeout
//! - [mock::MockHistory]: canned answers for tests
//!
//! ```rust
//! # use release_notes::git::{History, RevisionRange};
//! # fn example<H: History>(history: &H) -> release_notes::Result<()> {
//! let previous = history.nearest_tag("HEAD~1")?;
//! let subjects = history.commit_subjects(&RevisionRange::to_head(&previous))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockHistory;
pub use repository::Git2History;

use std::fmt;

use crate::error::Result;

/// Revision the release is being cut from.
pub const HEAD: &str = "HEAD";

/// Revision whose nearest tag names the previous release.
pub const PREVIOUS_OF_HEAD: &str = "HEAD~1";

/// A `from..to` revision range: commits reachable from `to` but not from `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub from: String,
    pub to: String,
}

impl RevisionRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        RevisionRange {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Range from `from` to the current `HEAD`.
    pub fn to_head(from: impl Into<String>) -> Self {
        Self::new(from, HEAD)
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Read-only history queries used by the release-notes pipeline
///
/// ## Error Handling
///
/// Every method returns [crate::error::Result<T>]. Callers treat any error as
/// recoverable and fall back; implementations should not retry.
pub trait History {
    /// Name of the most recent tag reachable from `revision`
    /// (`git describe --tags --abbrev=0 <revision>`).
    fn nearest_tag(&self, revision: &str) -> Result<String>;

    /// Full hash of the root commit reachable from `HEAD`
    /// (`git rev-list --max-parents=0 HEAD`, first line).
    fn root_commit(&self) -> Result<String>;

    /// Subject lines of the non-merge commits in `range`, newest first
    /// (`git log <range> --pretty=format:%s --no-merges`).
    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>>;
}

impl<H: History + ?Sized> History for &H {
    fn nearest_tag(&self, revision: &str) -> Result<String> {
        (**self).nearest_tag(revision)
    }

    fn root_commit(&self) -> Result<String> {
        (**self).root_commit()
    }

    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>> {
        (**self).commit_subjects(range)
    }
}

impl<H: History + ?Sized> History for Box<H> {
    fn nearest_tag(&self, revision: &str) -> Result<String> {
        (**self).nearest_tag(revision)
    }

    fn root_commit(&self) -> Result<String> {
        (**self).root_commit()
    }

    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>> {
        (**self).commit_subjects(range)
    }
}

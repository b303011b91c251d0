use std::cell::RefCell;

use crate::error::{ReleaseNotesError, Result};
use crate::git::{History, RevisionRange};

/// In-memory history for testing without a repository
///
/// Queries without a canned answer fail the way a bare repository would.
#[derive(Debug, Default)]
pub struct MockHistory {
    tag: Option<String>,
    root: Option<String>,
    subjects: Option<Vec<String>>,
    timeout_tag: bool,
    ranges: RefCell<Vec<RevisionRange>>,
}

impl MockHistory {
    /// Create a mock with no tags, no root commit and no listable commits
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer tag lookups with `tag`
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Make tag lookups fail with a timeout instead of "no tags"
    pub fn with_tag_timeout(mut self) -> Self {
        self.timeout_tag = true;
        self
    }

    /// Answer root-commit lookups with `hash`
    pub fn with_root(mut self, hash: impl Into<String>) -> Self {
        self.root = Some(hash.into());
        self
    }

    /// Answer every range query with `subjects`
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = Some(subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Ranges passed to [`History::commit_subjects`], in call order
    pub fn requested_ranges(&self) -> Vec<RevisionRange> {
        self.ranges.borrow().clone()
    }
}

impl History for MockHistory {
    fn nearest_tag(&self, revision: &str) -> Result<String> {
        if self.timeout_tag {
            return Err(ReleaseNotesError::timeout(
                format!("git describe --tags --abbrev=0 {}", revision),
                10,
            ));
        }
        self.tag.clone().ok_or_else(|| {
            ReleaseNotesError::history(format!("No names found, cannot describe {}", revision))
        })
    }

    fn root_commit(&self) -> Result<String> {
        self.root
            .clone()
            .ok_or_else(|| ReleaseNotesError::history("No commits found"))
    }

    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>> {
        self.ranges.borrow_mut().push(range.clone());
        self.subjects.clone().ok_or_else(|| {
            ReleaseNotesError::history(format!("bad revision '{}'", range))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_default_fails_every_query() {
        let history = MockHistory::default();
        assert!(history.nearest_tag("HEAD~1").is_err());
        assert!(history.root_commit().is_err());
        assert!(history.commit_subjects(&RevisionRange::to_head("x")).is_err());
    }

    #[test]
    fn test_mock_canned_answers() {
        let history = MockHistory::new()
            .with_tag("v1.0.0")
            .with_root("0123456789abcdef")
            .with_subjects(["feat: one", "fix: two"]);

        assert_eq!(history.nearest_tag("HEAD~1").unwrap(), "v1.0.0");
        assert_eq!(history.root_commit().unwrap(), "0123456789abcdef");
        assert_eq!(
            history
                .commit_subjects(&RevisionRange::to_head("v1.0.0"))
                .unwrap(),
            vec!["feat: one".to_string(), "fix: two".to_string()]
        );
        assert_eq!(
            history.requested_ranges(),
            vec![RevisionRange::to_head("v1.0.0")]
        );
    }

    #[test]
    fn test_mock_tag_timeout() {
        let history = MockHistory::new().with_tag("v1.0.0").with_tag_timeout();
        assert!(history.nearest_tag("HEAD~1").unwrap_err().is_timeout());
    }
}

//! Reading the commit history that a release covers.

use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::config::HistoryConfig;
use crate::error::{ReleaseNotesError, Result};
use crate::git::{History, RevisionRange, PREVIOUS_OF_HEAD};

/// Where the previous version label came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousSource {
    /// Given on the command line
    Explicit,
    /// Nearest tag reachable from `HEAD~1`
    Tag,
    /// Abbreviated root commit hash, used when no tag exists
    RootCommit,
}

/// The label the release range starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousVersion {
    pub label: String,
    pub source: PreviousSource,
}

/// Commit subjects for one release, plus anything worth telling the operator
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryReport {
    pub subjects: Vec<String>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves the previous version and lists the commits since it.
pub struct HistoryReader<H> {
    history: H,
    bump_marker: Regex,
    root_hash_length: usize,
}

impl<H: History> HistoryReader<H> {
    pub fn new(history: H, config: &HistoryConfig) -> Result<Self> {
        let bump_marker = Regex::new(&config.bump_marker).map_err(|e| {
            ReleaseNotesError::config(format!("invalid bump_marker '{}': {}", config.bump_marker, e))
        })?;

        Ok(HistoryReader {
            history,
            bump_marker,
            root_hash_length: config.root_hash_length,
        })
    }

    /// Determine the previous version label.
    ///
    /// A non-blank explicit label is used verbatim. Otherwise the nearest tag of
    /// `HEAD~1` is used, falling back to the abbreviated root commit hash.
    /// Fails only when the root commit cannot be found either.
    pub fn resolve_previous(
        &self,
        explicit: Option<&str>,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> Result<PreviousVersion> {
        if let Some(label) = explicit.filter(|label| !label.trim().is_empty()) {
            return Ok(PreviousVersion {
                label: label.to_string(),
                source: PreviousSource::Explicit,
            });
        }

        let tag_error = match self.history.nearest_tag(PREVIOUS_OF_HEAD) {
            Ok(tag) => {
                tracing::info!(tag = %tag, "resolved previous version from tag");
                return Ok(PreviousVersion {
                    label: tag,
                    source: PreviousSource::Tag,
                });
            }
            Err(e) => e,
        };

        tracing::debug!(error = %tag_error, "tag lookup failed, falling back to root commit");
        note_timeout(&tag_error, warnings);

        let root = self.history.root_commit()?;
        let label: String = root.chars().take(self.root_hash_length).collect();

        warnings.push(BoundaryWarning::NoPreviousTag {
            root_commit: label.clone(),
            reason: tag_error.to_string(),
        });

        Ok(PreviousVersion {
            label,
            source: PreviousSource::RootCommit,
        })
    }

    /// Subjects of the non-merge commits in `previous..HEAD`, newest first.
    ///
    /// Lines are trimmed, blank lines and version-bump commits are dropped.
    /// A failed query yields an empty list and a warning.
    pub fn commits_since(&self, previous: &str, warnings: &mut Vec<BoundaryWarning>) -> Vec<String> {
        let range = RevisionRange::to_head(previous);

        match self.history.commit_subjects(&range) {
            Ok(subjects) => {
                let total = subjects.len();
                let kept: Vec<String> = subjects
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .filter(|s| !self.bump_marker.is_match(s))
                    .map(str::to_string)
                    .collect();
                tracing::debug!(%range, total, kept = kept.len(), "read commit subjects");
                kept
            }
            Err(e) => {
                tracing::debug!(%range, error = %e, "commit listing failed");
                note_timeout(&e, warnings);
                warnings.push(BoundaryWarning::CommitListingFailed {
                    range: range.to_string(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Resolve the previous version and read the commits since it.
    pub fn read(&self, explicit_previous: Option<&str>) -> Result<(PreviousVersion, HistoryReport)> {
        let mut warnings = Vec::new();
        let previous = self.resolve_previous(explicit_previous, &mut warnings)?;
        let subjects = self.commits_since(&previous.label, &mut warnings);
        Ok((previous, HistoryReport { subjects, warnings }))
    }
}

fn note_timeout(error: &ReleaseNotesError, warnings: &mut Vec<BoundaryWarning>) {
    if let ReleaseNotesError::Timeout { command, secs } = error {
        warnings.push(BoundaryWarning::QueryTimedOut {
            query: command.clone(),
            secs: *secs,
        });
    }
}

//! Main workflow orchestration logic
//!
//! Wires the pipeline together: read history, classify each subject,
//! aggregate into buckets, render. Kept apart from `main.rs` so the whole
//! run can be driven programmatically with any [`History`] backend.

use std::path::Path;
use std::time::Duration;

use crate::aggregator::aggregate;
use crate::boundary::BoundaryWarning;
use crate::classifier::{Classifier, PatternTable};
use crate::config::{Backend, Config};
use crate::error::Result;
use crate::git::{Git2History, GitCli, History};
use crate::reader::{HistoryReader, PreviousVersion};
use crate::render::Renderer;

/// Arguments for the release-notes workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotesArgs {
    /// Version being released
    pub version: String,

    /// Previous version; resolved from history when absent
    pub previous_version: Option<String>,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotesOutcome {
    /// The rendered document
    pub document: String,

    /// Where the release range started
    pub previous: PreviousVersion,

    /// Commits considered after filtering
    pub commit_count: usize,

    /// Non-fatal problems met along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Build the history backend selected by `backend`.
pub fn open_history(backend: Backend, repo_dir: &Path, timeout: Duration) -> Result<Box<dyn History>> {
    match backend {
        Backend::Git2 => Ok(Box::new(Git2History::open(repo_dir)?)),
        Backend::Cli => Ok(Box::new(GitCli::new(repo_dir, timeout))),
    }
}

/// Generate release notes.
///
/// # Returns
///
/// The rendered document with everything worth reporting. Fails only on
/// invalid configuration or when no previous version can be determined.
pub fn run_release_notes<H: History>(
    args: &ReleaseNotesArgs,
    config: &Config,
    history: H,
) -> Result<ReleaseNotesOutcome> {
    let classifier = Classifier::new(PatternTable::from_config(config)?)?;
    let renderer = Renderer::new(config.footer.clone());
    let reader = HistoryReader::new(history, &config.history)?;

    let (previous, report) = reader.read(args.previous_version.as_deref())?;
    let commit_count = report.subjects.len();

    let buckets = aggregate(classifier.classify_all(&report.subjects));
    tracing::info!(
        version = %args.version,
        previous = %previous.label,
        commits = commit_count,
        items = buckets.total(),
        "generating release notes"
    );

    Ok(ReleaseNotesOutcome {
        document: renderer.render(&args.version, &buckets),
        previous,
        commit_count,
        warnings: report.warnings,
    })
}

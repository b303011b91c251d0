use crate::error::{ReleaseNotesError, Result};
use crate::git::{History, RevisionRange};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo, Sort};
use std::path::Path;

/// History backed by an in-process libgit2 repository handle
pub struct Git2History {
    repo: Git2Repo,
}

impl Git2History {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            ReleaseNotesError::history(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2History { repo })
    }
}

impl History for Git2History {
    fn nearest_tag(&self, revision: &str) -> Result<String> {
        let object = self.repo.revparse_single(revision)?;

        let mut options = DescribeOptions::new();
        options.describe_tags();
        let describe = object.describe(&options)?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        tracing::debug!(revision, tag = %tag, "described revision");
        Ok(tag)
    }

    fn root_commit(&self) -> Result<String> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TIME)?;

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() == 0 {
                return Ok(commit.id().to_string());
            }
        }

        Err(ReleaseNotesError::history("No root commit reachable from HEAD"))
    }

    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_range(&range.to_string())?;

        let mut subjects = Vec::new();

        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;

            // --no-merges
            if commit.parent_count() > 1 {
                continue;
            }

            subjects.push(commit.summary().unwrap_or_default().to_string());
        }

        tracing::debug!(%range, count = subjects.len(), "listed commit subjects");
        Ok(subjects)
    }
}

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{ReleaseNotesError, Result};
use crate::git::{History, RevisionRange, HEAD};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// History answered by `git` subprocesses
///
/// Each query is a separate process. A query that outlives `timeout` is
/// killed and reported as [`ReleaseNotesError::Timeout`].
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    repo_dir: PathBuf,
    timeout: Duration,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        GitCli {
            program: "git".to_string(),
            repo_dir: repo_dir.into(),
            timeout,
        }
    }

    /// Use a different executable in place of `git`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.repo_dir);

        let command_line = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(command = %command_line, "running history query");
        run_with_timeout(command, &command_line, self.timeout)
    }
}

impl History for GitCli {
    fn nearest_tag(&self, revision: &str) -> Result<String> {
        let stdout = self.git(&["describe", "--tags", "--abbrev=0", revision])?;
        let tag = stdout.trim();
        if tag.is_empty() {
            return Err(ReleaseNotesError::history(format!(
                "No tag found for {}",
                revision
            )));
        }
        Ok(tag.to_string())
    }

    fn root_commit(&self) -> Result<String> {
        let stdout = self.git(&["rev-list", "--max-parents=0", HEAD])?;
        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ReleaseNotesError::history("No root commit reachable from HEAD"))
    }

    fn commit_subjects(&self, range: &RevisionRange) -> Result<Vec<String>> {
        let range = range.to_string();
        let stdout = self.git(&["log", &range, "--pretty=format:%s", "--no-merges"])?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

/// Runs a command to completion or until `timeout` elapses.
///
/// Stdout and stderr are drained on helper threads so a chatty child cannot
/// block on a full pipe while we poll. On timeout the child is killed.
///
/// # Returns
/// * `Ok(String)` - stdout of a successful run
/// * `Err(Timeout)` - the command was still running after `timeout`
/// * `Err(History)` - the command could not start or exited non-zero
pub fn run_with_timeout(mut command: Command, command_line: &str, timeout: Duration) -> Result<String> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ReleaseNotesError::history(format!("Failed to run '{}': {}", command_line, e)))?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    let start = Instant::now();

    let status = loop {
        let polled = match child.try_wait() {
            Ok(polled) => polled,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        };
        match polled {
            Some(status) => break status,
            None => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::debug!(command = command_line, ?timeout, "history query timed out");
                    return Err(ReleaseNotesError::timeout(command_line, timeout.as_secs()));
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    };

    let stdout = collect(stdout);
    let stderr = collect(stderr);

    if !status.success() {
        return Err(ReleaseNotesError::history(format!(
            "'{}' failed ({}): {}",
            command_line,
            status,
            stderr.trim()
        )));
    }

    Ok(stdout)
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_history_error() {
        let cli = GitCli::new(".", Duration::from_secs(1)).with_program("definitely-not-a-git-binary");
        let err = cli.root_commit().unwrap_err();
        assert!(matches!(err, ReleaseNotesError::History(_)));
        assert!(err.to_string().contains(
            "Failed to run 'definitely-not-a-git-binary rev-list --max-parents=0 HEAD'"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_slow_command() {
        let mut command = Command::new("sleep");
        command.arg("5");

        let start = Instant::now();
        let err = run_with_timeout(command, "sleep 5", Duration::from_millis(100)).unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Command 'sleep 5' timed out after 0s");
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_reports_stderr() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo boom >&2; exit 3"]);

        let err = run_with_timeout(command, "sh", Duration::from_secs(5)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("boom"), "got: {}", msg);
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_does_not_stall() {
        let mut command = Command::new("sh");
        command.args(["-c", "i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"]);

        let stdout = run_with_timeout(command, "sh", Duration::from_secs(30)).unwrap();
        assert_eq!(stdout.lines().count(), 20000);
    }
}

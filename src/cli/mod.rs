//! Programmatic entry points behind the binaries

pub mod orchestration;

pub use orchestration::{open_history, run_release_notes, ReleaseNotesArgs, ReleaseNotesOutcome};

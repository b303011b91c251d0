//! Pure formatting functions for UI output.
//!
//! Everything except the rendered document goes to stderr, so stdout can be
//! redirected straight into a release body.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::reader::{PreviousSource, PreviousVersion};

/// Format an error line: red `ERROR:` prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a warning line: yellow `⚠ WARNING:` prefix.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Format a status line: yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Describe where the release range starts.
pub fn format_previous_version(previous: &PreviousVersion) -> String {
    let origin = match previous.source {
        PreviousSource::Explicit => "given",
        PreviousSource::Tag => "nearest tag",
        PreviousSource::RootCommit => "root commit",
    };
    format!(
        "Collecting commits since {} ({})",
        style(&previous.label).cyan(),
        origin
    )
}

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a boundary warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Print a status message to stderr.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print the previous-version summary to stderr.
pub fn display_previous_version(previous: &PreviousVersion) {
    display_status(&format_previous_version(previous));
}

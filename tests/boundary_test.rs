// tests/boundary_test.rs
use release_notes::boundary::BoundaryWarning;
use release_notes::config::HistoryConfig;
use release_notes::git::MockHistory;
use release_notes::reader::{HistoryReader, PreviousSource};
use release_notes::ui::formatter::format_boundary_warning;

#[test]
fn test_no_previous_tag_message() {
    let warning = BoundaryWarning::NoPreviousTag {
        root_commit: "0123abcd".to_string(),
        reason: "No tags can describe HEAD~1".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "No previous tag found (No tags can describe HEAD~1); using root commit 0123abcd"
    );
}

#[test]
fn test_query_timed_out_message() {
    let warning = BoundaryWarning::QueryTimedOut {
        query: "git describe --tags --abbrev=0 HEAD~1".to_string(),
        secs: 10,
    };
    assert_eq!(
        warning.to_string(),
        "History query 'git describe --tags --abbrev=0 HEAD~1' timed out after 10s"
    );
}

#[test]
fn test_commit_listing_failed_message() {
    let warning = BoundaryWarning::CommitListingFailed {
        range: "v1.0.0..HEAD".to_string(),
        reason: "unknown revision".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "Error getting commits for v1.0.0..HEAD: unknown revision"
    );
}

#[test]
fn test_warning_formatting_keeps_message() {
    let warning = BoundaryWarning::QueryTimedOut {
        query: "describe".to_string(),
        secs: 3,
    };
    let formatted = format_boundary_warning(&warning);
    let plain = console::strip_ansi_codes(&formatted);
    assert!(plain.starts_with("⚠ WARNING: "));
    assert!(plain.ends_with("History query 'describe' timed out after 3s"));
}

#[test]
fn test_tag_timeout_then_root_fallback_collects_two_warnings() {
    let history = MockHistory::new()
        .with_tag_timeout()
        .with_root("fedcba9876543210fedcba9876543210fedcba98")
        .with_subjects(["feat: chore list"]);
    let reader = HistoryReader::new(&history, &HistoryConfig::default()).unwrap();

    let (previous, report) = reader.read(None).unwrap();

    assert_eq!(previous.source, PreviousSource::RootCommit);
    assert_eq!(previous.label, "fedcba98");
    assert_eq!(report.subjects, vec!["feat: chore list"]);
    assert!(matches!(
        report.warnings.as_slice(),
        [
            BoundaryWarning::QueryTimedOut { secs: 10, .. },
            BoundaryWarning::NoPreviousTag { root_commit, .. },
        ] if root_commit == "fedcba98"
    ));
}

#[test]
fn test_explicit_previous_raises_no_warnings() {
    let history = MockHistory::new().with_subjects(["fix: typo in error message"]);
    let reader = HistoryReader::new(&history, &HistoryConfig::default()).unwrap();

    let (previous, report) = reader.read(Some("v2.0.0")).unwrap();

    assert_eq!(previous.source, PreviousSource::Explicit);
    assert!(report.warnings.is_empty());
}

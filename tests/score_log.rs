//! Behaviour tests for grading a test-run log file.

use std::io::Write;

use shapebench_core::{CoreError, ScoreConfig, ScoreSummary};
use tempfile::NamedTempFile;

fn log_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write log");
    file
}

#[test]
fn passing_log_scores_fifty_per_marker() {
    let file = log_file("test_session8.py ........\n===== 8 passed =====\n");
    let summary = ScoreSummary::from_path(file.path(), &ScoreConfig::default()).expect("readable");

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.score, 100);
    assert!(!summary.has_failures());
}

#[test]
fn failures_are_counted_and_flagged() {
    let file = log_file("....\n[FAILED] test_a\n[FAILED] test_b\n");
    let summary = ScoreSummary::from_path(file.path(), &ScoreConfig::default()).expect("readable");

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.total(), 3);
    assert!(summary.has_failures());
    assert!(summary
        .render_table()
        .contains("Grand total tests passed: 1/3"));
}

#[test]
fn custom_rules_change_points_and_cap() {
    let config = ScoreConfig {
        max_score: 120,
        points_per_pass: 40,
        ..ScoreConfig::default()
    };
    let summary = ScoreSummary::from_log(&"....".repeat(5), &config);
    assert_eq!(summary.score, 120);
    assert_eq!(summary.max_score, 120);
}

#[test]
fn missing_log_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("result.log");
    let err = ScoreSummary::from_path(&missing, &ScoreConfig::default()).expect_err("must fail");
    assert!(matches!(err, CoreError::Io { .. }));
}

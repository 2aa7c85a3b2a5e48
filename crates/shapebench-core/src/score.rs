//! Test-run log grading.
//!
//! Counts pass and failure markers in a captured test log and turns them into
//! a capped score with a fixed-format summary table.

use std::fmt::Write as _;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::CoreError;

/// Environment variable naming the log to grade.
pub const LOG_FILE_ENV: &str = "LOG_FILE";
/// Log path used when [`LOG_FILE_ENV`] is unset.
pub const DEFAULT_LOG_FILE: &str = "result.log";

/// Scoring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreConfig {
    pub max_score: u32,
    pub points_per_pass: u32,
    pub pass_marker: String,
    pub fail_marker: String,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_score: 1000,
            points_per_pass: 50,
            pass_marker: String::from("...."),
            fail_marker: String::from("[FAILED]"),
        }
    }
}

/// Marker counts and resulting score for one log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub passed: usize,
    pub failed: usize,
    pub score: u32,
    pub max_score: u32,
}

impl ScoreSummary {
    /// Grade log text. Markers are matched literally and never overlap.
    pub fn from_log(content: &str, config: &ScoreConfig) -> Self {
        let passed = count_literal(content, &config.pass_marker);
        let failed = count_literal(content, &config.fail_marker);
        let earned = (passed as u64).saturating_mul(u64::from(config.points_per_pass));
        let score = earned.min(u64::from(config.max_score)) as u32;

        Self {
            passed,
            failed,
            score,
            max_score: config.max_score,
        }
    }

    pub fn from_path(path: impl AsRef<Path>, config: &ScoreConfig) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_log(&content, config))
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Fixed-format summary table followed by the grand-total line.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let score = self.score;
        let max = self.max_score;
        let _ = writeln!(out, "Test runner summary");
        let _ = writeln!(out, "┌────────────────────┬─────────────┬─────────────┐");
        let _ = writeln!(out, "│ Test Runner Name   │ Test Score  │ Max Score   │");
        let _ = writeln!(out, "├────────────────────┼─────────────┼─────────────┤");
        let _ = writeln!(out, "│ test_session      │ {score:4}   │{max:4}│");
        let _ = writeln!(out, "├────────────────────┼─────────────┼─────────────┤");
        let _ = writeln!(out, "│ Total:            │ {score:4}   │{max:4}│");
        let _ = writeln!(out, "└────────────────────┴─────────────┴─────────────┘");
        let _ = writeln!(
            out,
            "🏆 Grand total tests passed: {}/{}",
            self.passed,
            self.total()
        );
        out
    }
}

fn count_literal(content: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    match Regex::new(&regex::escape(marker)) {
        Ok(pattern) => pattern.find_iter(content).count(),
        Err(_) => content.matches(marker).count(),
    }
}

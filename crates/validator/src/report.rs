//! Check sequencing and report rendering.

use std::io::Write;

use serde::Serialize;

use genre_core::genre::GameGenre;

use crate::checks::{Check, CheckOutcome};

/// Whether to stop at the first failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    FailFast,
    All,
}

/// How a finished report is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Log lines on stderr.
    Text,
    /// Pretty JSON on stdout.
    Json,
}

/// Outcomes of every check that ran, in precedence order.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub genre_count: usize,
    pub outcomes: Vec<CheckOutcome>,
    pub failed: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }
}

/// Run checks in precedence order.
///
/// In [`RunMode::FailFast`] nothing after the first failing check runs.
pub fn run_checks(genres: &[GameGenre], mode: RunMode) -> ValidationReport {
    let mut outcomes = Vec::with_capacity(Check::ALL.len());
    let mut failed = 0;

    for check in Check::ALL {
        let outcome = check.run(genres);
        tracing::debug!(
            check = check.id(),
            passed = outcome.passed,
            violations = outcome.violations.len(),
            "Check evaluated",
        );

        let passed = outcome.passed;
        outcomes.push(outcome);

        if !passed {
            failed += 1;
            if mode == RunMode::FailFast {
                break;
            }
        }
    }

    ValidationReport {
        genre_count: genres.len(),
        outcomes,
        failed,
    }
}

/// Log each failing check's headline followed by one line per violation.
pub fn log_report(report: &ValidationReport) {
    for outcome in report.failures() {
        tracing::error!(check = outcome.check.id(), "{}", outcome.description);
        for item in &outcome.violations {
            tracing::error!("{item}");
        }
    }

    if report.is_valid() {
        tracing::info!(
            genres = report.genre_count,
            checks = report.outcomes.len(),
            "All checks passed",
        );
    }
}

/// Write the report as pretty JSON followed by a newline.
pub fn write_json<W: Write>(report: &ValidationReport, mut writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)
}

use std::path::PathBuf;

use clap::Parser;

use crate::report::{ReportFormat, RunMode};

/// Command-line configuration.
///
/// Every option can also come from the environment (or a `.env` file):
///
/// | Env Var               | Default | Description                          |
/// |-----------------------|---------|--------------------------------------|
/// | `GENRES_FILE`         | --      | Catalog path when none is given      |
/// | `GENRE_REPORT_FORMAT` | `text`  | `text` or `json`                     |
/// | `GENRE_CHECK_ALL`     | `false` | Run every check instead of stopping  |
/// | `RUST_LOG`            | `genre_validator=info,genre_reader=info` | Log filter |
#[derive(Debug, Clone, Parser)]
#[command(name = "genre-validator")]
#[command(about = "Check a game genre catalog for naming and collision problems", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the genre catalog JSON file.
    #[arg(env = "GENRES_FILE")]
    pub path: PathBuf,

    /// Report format.
    #[arg(long, value_enum, env = "GENRE_REPORT_FORMAT", default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Run every check instead of stopping at the first failure.
    #[arg(long, env = "GENRE_CHECK_ALL")]
    pub all: bool,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        if self.all {
            RunMode::All
        } else {
            RunMode::FailFast
        }
    }
}

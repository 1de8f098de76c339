//! `genre-validator` -- data-quality gate for game genre catalogs.
//!
//! Loads a JSON catalog, runs the naming and collision checks in precedence
//! order (emptiness, trimming, case, uniqueness, collisions) and exits
//! non-zero if any check fails or the catalog cannot be loaded.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use genre_validator::config::Cli;
use genre_validator::report::{self, ReportFormat};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genre_validator=info,genre_reader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every executed check passed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    tracing::debug!(path = %cli.path.display(), format = ?cli.format, all = cli.all, "Validating catalog");

    let genres =
        genre_reader::read_game_genres(&cli.path).context("Failed to read game genres")?;

    let report = report::run_checks(&genres, cli.run_mode());

    match cli.format {
        ReportFormat::Text => report::log_report(&report),
        ReportFormat::Json => report::write_json(&report, std::io::stdout().lock())
            .context("Failed to write report")?,
    }

    Ok(report.is_valid())
}

//! after: resolve relative time expressions from the command line.
//!
//! Parses arguments, sets up logging, and prints one line per expression.

#![forbid(unsafe_code)]

mod cli;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use output::Resolution;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` decides the level unless `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args(std::env::args_os());
    init_logging(cli.verbose);

    let moment = cli.since.unwrap_or_else(|| Utc::now().fixed_offset());
    debug!(%moment, "reference moment");

    let mut stdout = io::stdout().lock();
    for expression in &cli.expressions {
        let resolution = Resolution::resolve(expression, &moment)
            .with_context(|| format!("cannot resolve '{expression}'"))?;
        debug!(
            expression = %resolution.expression,
            normalized = %resolution.normalized,
            nanoseconds = resolution.nanoseconds,
            "resolved expression"
        );

        let line = if cli.json {
            serde_json::to_string(&resolution).context("failed to serialize result")?
        } else if cli.duration_only {
            resolution.duration_line()
        } else {
            resolution.resolved
        };
        writeln!(stdout, "{line}")?;
    }

    Ok(ExitCode::SUCCESS)
}

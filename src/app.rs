//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - prompts for any value not given on the command line
//! - runs the exponent search
//! - prints the report

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::domain::{Report, SearchConfig, SearchInput};
use crate::error::AppError;
use crate::input::{Prompter, bases_from_values};

/// Entry point for the `dejager` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init()?;

    let cli = Cli::parse();
    let config = config_from_args(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = run_with(&config, stdin.lock(), stdout.lock())?;

    let rendered = crate::report::render(&report, config.format)?;
    println!("{rendered}");
    Ok(())
}

pub fn config_from_args(cli: &Cli) -> Result<SearchConfig, AppError> {
    let bases = cli.bases.as_deref().map(bases_from_values).transpose()?;
    Ok(SearchConfig {
        target: cli.target,
        bases,
        format: cli.format,
    })
}

/// Resolve the input (prompting on `reader`/`writer` where needed), search, and build the report.
pub fn run_with<R: BufRead, W: Write>(
    config: &SearchConfig,
    reader: R,
    writer: W,
) -> Result<Report, AppError> {
    let input = resolve_input(config, &mut Prompter::new(reader, writer))?;
    info!(target_value = input.target, bases = %input.bases, "searching exponents");

    let result = crate::search::search(&input);
    Ok(Report::new(input.target, &result))
}

fn resolve_input<R: BufRead, W: Write>(
    config: &SearchConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<SearchInput, AppError> {
    let target = match config.target {
        Some(target) => target,
        None => prompter.read_positive()?,
    };
    let bases = match config.bases {
        Some(bases) => bases,
        None => prompter.read_bases()?,
    };
    Ok(SearchInput { target, bases })
}

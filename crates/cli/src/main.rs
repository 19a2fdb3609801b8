//! tageval CLI - confusion-matrix evaluation for sequence-tagger output
//!
//! This binary scores a tagged-output file against a fixed label vocabulary
//! and prints the confusion matrix, per-label metrics, and a summary line.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tageval::{dump, report};
use tageval_core::{load_file, Error as CoreError, EvalConfig, MatrixEngine};
use tracing::info;

#[derive(Parser)]
#[command(name = "tageval")]
#[command(about = "Confusion-matrix evaluation for sequence-tagger output")]
#[command(version = tageval_core::VERSION)]
struct Cli {
    /// Tagged-output file to score (tab-separated, labels in the last two fields)
    input: PathBuf,

    /// Ordered label vocabulary, comma-separated (e.g. "I-NP,B-NP,B-ADJP,I-ADJP")
    #[arg(short, long, value_delimiter = ',', value_name = "LABELS")]
    labels: Vec<String>,

    /// TOML configuration file with the vocabulary (alternative to --labels)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write correct/wrong prediction analysis files
    #[arg(long)]
    dump: bool,

    /// Override the correct-predictions dump path
    #[arg(long, value_name = "FILE")]
    correct_file: Option<PathBuf>,

    /// Override the wrong-predictions dump path
    #[arg(long, value_name = "FILE")]
    wrong_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("tageval={level},tageval_core={level}"))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    let mut engine = MatrixEngine::new(config.labels.clone())?;
    let records = load_file(&cli.input, &mut engine)?;
    info!(records, "evaluation input loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::print_report(&mut out, &engine)?;

    if cli.dump {
        dump::write_predictions(&engine, &config.correct_file, &config.wrong_file)?;
    }

    report::print_summary(&mut out, &engine)?;
    out.flush()?;

    Ok(())
}

/// Build the evaluation configuration from CLI arguments.
///
/// The vocabulary comes from `--labels` when given, otherwise from the
/// `--config` TOML file. Dump-path overrides apply on top of either source.
fn resolve_config(cli: &Cli) -> Result<EvalConfig> {
    let mut config = if !cli.labels.is_empty() {
        EvalConfig::new(cli.labels.clone())
    } else if let Some(path) = &cli.config {
        EvalConfig::from_toml_file(path)?
    } else {
        return Err(CoreError::config(
            "no label vocabulary given; pass --labels or --config",
        )
        .into());
    };

    if let Some(path) = &cli.correct_file {
        config.correct_file = path.clone();
    }
    if let Some(path) = &cli.wrong_file {
        config.wrong_file = path.clone();
    }

    Ok(config)
}

/// Print a short user-facing message for a failed run.
///
/// Expected error kinds get a one-line hint; anything else is surfaced
/// generically. No stack traces.
fn report_error(e: &anyhow::Error) {
    match e.downcast_ref::<CoreError>() {
        Some(err @ CoreError::FileNotFound(_)) => {
            eprintln!("Error: {err}");
            eprintln!("Please make sure the test file exists.");
        }
        Some(err @ CoreError::Format { .. }) => {
            eprintln!("Error: {err}");
            eprintln!("Please check the file format.");
        }
        Some(err) => {
            eprintln!("Error: {err}");
        }
        None => {
            eprintln!("Unexpected error: {e}");
        }
    }
}

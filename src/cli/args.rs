//! Command line argument parsing for the titanic CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Titanic - baseline survival analysis for the classic passenger dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "titanic")]
#[command(about = "Baseline survival analysis for the Titanic passenger dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Titanic Contributors")]
#[command(long_about = None)]
pub struct TitanicArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TitanicArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full survival analysis
    Analyze(AnalyzeArgs),

    /// Show the title distribution of a dataset
    Titles(TitlesArgs),
}

/// Arguments for the survival analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the passengers CSV file
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Fraction of passengers held out for testing
    #[arg(long, default_value = "0.2")]
    pub test_size: f64,

    /// Seed for the train/test split and the fold shuffle
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Number of cross-validation folds
    #[arg(long, default_value = "10")]
    pub folds: usize,
}

/// Arguments for the title distribution
#[derive(Parser, Debug, Clone)]
pub struct TitlesArgs {
    /// Path to the passengers CSV file
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

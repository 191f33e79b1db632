//! Command implementations for the titanic CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pipeline::{AnalysisConfig, run_analysis, title_distribution};

/// Execute a CLI command.
pub fn execute_command(args: TitanicArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Titles(titles_args) => titles(titles_args.clone(), &args),
    }
}

/// Run the full survival analysis.
fn analyze(args: AnalyzeArgs, cli_args: &TitanicArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Analyzing passengers from: {}", args.data_file.display());
        println!();
    }

    let mut config = AnalysisConfig::new(args.data_file);
    config.test_size = args.test_size;
    config.seed = args.seed;
    config.folds = args.folds;

    let report = run_analysis(&config)?;
    output_report(&report, cli_args)
}

/// Show the title distribution of a dataset.
fn titles(args: TitlesArgs, cli_args: &TitanicArgs) -> Result<()> {
    let counts = title_distribution(&args.data_file)?;
    output_title_counts(&counts, cli_args)
}

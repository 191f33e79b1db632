//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, TitanicArgs};
use crate::data::title::Title;
use crate::error::Result;
use crate::pipeline::AnalysisReport;

/// One row of the title distribution, in a serializable shape.
#[derive(Debug, Serialize)]
struct TitleCount {
    title: Title,
    count: usize,
}

/// Output the analysis report in the selected format.
pub fn output_report(report: &AnalysisReport, args: &TitanicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_report_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output the title distribution in the selected format.
pub fn output_title_counts(counts: &[(Title, usize)], args: &TitanicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Title Distribution:");
            println!("═══════════════════");
            for (title, count) in counts {
                println!("{title}: {count}");
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<TitleCount> = counts
                .iter()
                .map(|&(title, count)| TitleCount { title, count })
                .collect();
            output_json(&entries, args)
        }
    }
}

/// Output the report in human-readable format.
fn output_report_human(report: &AnalysisReport, args: &TitanicArgs) -> Result<()> {
    println!("Survival Analysis:");
    println!("══════════════════");
    println!("Passengers: {}", report.n_passengers);
    println!("Train/test split: {} / {}", report.n_train, report.n_test);
    println!(
        "Majority vote accuracy: {}",
        format_percent(report.baseline_accuracy)
    );
    println!("Best C: {}", report.best_c);
    println!(
        "Cross-validation accuracy: {}",
        format_percent(report.cv_accuracy)
    );
    println!(
        "Logistic regression accuracy: {}",
        format_percent(report.model_accuracy)
    );

    if args.verbosity() > 1 {
        println!();
        println!("Candidates:");
        println!("───────────");
        for candidate in &report.candidates {
            println!(
                "C = {}: {} (std {:.3})",
                candidate.c,
                format_percent(candidate.mean_accuracy),
                candidate.std_accuracy
            );
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TitanicArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a fraction as a percentage with one decimal place.
fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

//! End-to-end survival analysis.
//!
//! The pipeline ties the pieces together: load the CSV, derive titles,
//! encode features, split, score the majority-vote baseline, tune the
//! regularization strength with cross-validation, and score the tuned
//! logistic regression on the held-out passengers.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::data::loader::load_passengers;
use crate::data::title::{Title, extract_titles};
use crate::error::Result;
use crate::ml::Classifier;
use crate::ml::baseline::MajorityVote;
use crate::ml::dataset::Dataset;
use crate::ml::logistic::LogisticRegression;
use crate::ml::metrics::accuracy_score;
use crate::ml::search::{CandidateScore, KFold, default_c_grid, search_regularization};

/// Default fraction of passengers held out for testing.
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Default number of cross-validation folds.
pub const DEFAULT_FOLDS: usize = 10;

/// Configuration for a full analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the passengers CSV file.
    pub data_path: PathBuf,
    /// Fraction of passengers held out for testing.
    pub test_size: f64,
    /// Seed for the train/test split and the fold shuffle.
    pub seed: u64,
    /// Number of cross-validation folds.
    pub folds: usize,
    /// Candidate inverse regularization strengths, in evaluation order.
    pub c_grid: Vec<f64>,
}

impl AnalysisConfig {
    /// Creates a configuration with the default split, folds and grid.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            test_size: DEFAULT_TEST_SIZE,
            seed: 0,
            folds: DEFAULT_FOLDS,
            c_grid: default_c_grid(),
        }
    }
}

/// Results of a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Total passengers loaded.
    pub n_passengers: usize,
    /// Training partition size.
    pub n_train: usize,
    /// Test partition size.
    pub n_test: usize,
    /// Test accuracy of the majority-vote baseline.
    pub baseline_accuracy: f64,
    /// Test accuracy of the tuned logistic regression.
    pub model_accuracy: f64,
    /// Winning inverse regularization strength.
    pub best_c: f64,
    /// Mean cross-validation accuracy of the winner.
    pub cv_accuracy: f64,
    /// Every candidate with its fold statistics, in grid order.
    pub candidates: Vec<CandidateScore>,
}

/// Runs the complete analysis for the given configuration.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let passengers = load_passengers(&config.data_path)?;
    let n_passengers = passengers.len();
    let titled = extract_titles(passengers)?;
    let dataset = Dataset::from_titled(&titled);
    let (train, test) = dataset.train_test_split(config.test_size, config.seed)?;

    log::info!("Scoring the majority vote baseline");
    let mut baseline = MajorityVote::new();
    baseline.fit(&train.features, &train.labels)?;
    let baseline_predictions = baseline.predict(&test.features)?;
    let baseline_accuracy = accuracy_score(&test.labels, &baseline_predictions)?;
    log::info!("Majority vote accuracy: {:.1}%", baseline_accuracy * 100.0);

    let folds = KFold::new(config.folds, config.seed)?;
    let search = search_regularization(&train, &config.c_grid, &folds)?;

    log::info!("Fitting the logistic regression with C = {}", search.best_c);
    let mut model = LogisticRegression::with_c(search.best_c)?;
    model.fit(&train.features, &train.labels)?;
    let predictions = model.predict(&test.features)?;
    let model_accuracy = accuracy_score(&test.labels, &predictions)?;
    log::info!("Logistic regression accuracy: {:.1}%", model_accuracy * 100.0);

    Ok(AnalysisReport {
        n_passengers,
        n_train: train.len(),
        n_test: test.len(),
        baseline_accuracy,
        model_accuracy,
        best_c: search.best_c,
        cv_accuracy: search.best_accuracy,
        candidates: search.candidates,
    })
}

/// Counts passengers per title category for a dataset on disk.
///
/// Every category appears in the result, zero counts included, in the
/// one-hot column order.
pub fn title_distribution(data_path: &Path) -> Result<Vec<(Title, usize)>> {
    let passengers = load_passengers(data_path)?;
    let titled = extract_titles(passengers)?;

    let mut counts: AHashMap<Title, usize> = AHashMap::new();
    for passenger in &titled {
        *counts.entry(passenger.title).or_default() += 1;
    }
    Ok(Title::ALL
        .iter()
        .map(|&title| (title, counts.get(&title).copied().unwrap_or(0)))
        .collect())
}

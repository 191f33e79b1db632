//! Cross-validation and regularization strength search.
//!
//! [`search_regularization`] mirrors the usual grid search recipe for this
//! dataset: every candidate `C` is scored with seeded k-fold
//! cross-validation on the training partition, candidates are evaluated in
//! parallel, and the best mean accuracy wins. Ties go to the candidate that
//! appears first in the grid.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::dataset::Dataset;
use crate::ml::logistic::LogisticRegression;
use crate::ml::metrics::{accuracy_score, mean, population_std};
use crate::ml::{Classifier, MLError};

/// Seeded k-fold splitter.
///
/// Indices are shuffled once, then partitioned into `n_splits` validation
/// folds of near-equal size (the first `n % k` folds get one extra index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KFold {
    n_splits: usize,
    seed: u64,
}

impl KFold {
    /// Creates a splitter with `n_splits` folds.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] for fewer than two folds.
    pub fn new(n_splits: usize, seed: u64) -> Result<Self> {
        if n_splits < 2 {
            return Err(MLError::InvalidParameter {
                name: "n_splits".to_string(),
                message: format!("need at least 2 folds, got {n_splits}"),
            }
            .into());
        }
        Ok(Self { n_splits, seed })
    }

    /// Number of folds.
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Produces `(train, validation)` index pairs, one per fold.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InsufficientTrainingData`] when there are fewer
    /// samples than folds.
    pub fn split(&self, n_samples: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        if n_samples < self.n_splits {
            return Err(MLError::InsufficientTrainingData {
                min_samples: self.n_splits,
                actual: n_samples,
            }
            .into());
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let base = n_samples / self.n_splits;
        let extra = n_samples % self.n_splits;
        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold in 0..self.n_splits {
            let size = base + usize::from(fold < extra);
            let validation = indices[start..start + size].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(&indices[start + size..])
                .copied()
                .collect();
            folds.push((train, validation));
            start += size;
        }
        Ok(folds)
    }
}

/// Validation accuracy of `model` on every fold.
///
/// Each fold refits a clone of the given model on the fold's train indices
/// and scores it on the held-out indices. The passed model itself is never
/// fitted.
pub fn cross_val_score<M>(model: &M, dataset: &Dataset, folds: &KFold) -> Result<Vec<f64>>
where
    M: Classifier + Clone,
{
    let mut scores = Vec::with_capacity(folds.n_splits());
    for (train_indices, validation_indices) in folds.split(dataset.len())? {
        let train = dataset.subset(&train_indices);
        let validation = dataset.subset(&validation_indices);

        let mut fold_model = model.clone();
        fold_model.fit(&train.features, &train.labels)?;
        let predicted = fold_model.predict(&validation.features)?;
        scores.push(accuracy_score(&validation.labels, &predicted)?);
    }
    Ok(scores)
}

/// The default candidate grid: powers of two from `2^-10` to `2^9`.
pub fn default_c_grid() -> Vec<f64> {
    (-10..=9).map(|exponent| 2.0_f64.powi(exponent)).collect()
}

/// Cross-validation summary for one candidate `C`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Candidate inverse regularization strength.
    pub c: f64,
    /// Mean validation accuracy across folds.
    pub mean_accuracy: f64,
    /// Standard deviation of the fold accuracies.
    pub std_accuracy: f64,
}

/// Outcome of a regularization strength search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegularizationSearch {
    /// The winning inverse regularization strength.
    pub best_c: f64,
    /// Mean cross-validation accuracy of the winner.
    pub best_accuracy: f64,
    /// Every candidate with its fold statistics, in grid order.
    pub candidates: Vec<CandidateScore>,
}

/// Scores every candidate `C` and picks the best by mean fold accuracy.
///
/// Candidates are evaluated in parallel; the result order follows the grid.
pub fn search_regularization(
    dataset: &Dataset,
    grid: &[f64],
    folds: &KFold,
) -> Result<RegularizationSearch> {
    if grid.is_empty() {
        return Err(MLError::InvalidParameter {
            name: "grid".to_string(),
            message: "need at least one candidate C".to_string(),
        }
        .into());
    }
    log::info!(
        "Cross-validating the regularization strength over {} candidates with {} folds",
        grid.len(),
        folds.n_splits()
    );

    let candidates: Vec<CandidateScore> = grid
        .par_iter()
        .map(|&c| {
            let model = LogisticRegression::with_c(c)?;
            let scores = cross_val_score(&model, dataset, folds)?;
            let mean_accuracy = mean(&scores);
            Ok(CandidateScore {
                c,
                mean_accuracy,
                std_accuracy: population_std(&scores, mean_accuracy),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for candidate in &candidates {
        log::debug!(
            "C = {}: accuracy {:.1}% (std {:.3})",
            candidate.c,
            candidate.mean_accuracy * 100.0,
            candidate.std_accuracy
        );
    }

    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.mean_accuracy > best.mean_accuracy {
            best = candidate;
        }
    }
    log::info!(
        "Best C is {} with accuracy {:.1}%",
        best.c,
        best.mean_accuracy * 100.0
    );

    let (best_c, best_accuracy) = (best.c, best.mean_accuracy);
    Ok(RegularizationSearch {
        best_c,
        best_accuracy,
        candidates,
    })
}

//! Evaluation metrics.

use crate::error::Result;
use crate::ml::MLError;

/// Fraction of predictions matching the actual labels, in `[0, 1]`.
///
/// # Errors
///
/// Returns [`MLError::DimensionMismatch`] when the slices differ in length
/// and [`MLError::InvalidParameter`] when they are empty.
pub fn accuracy_score(actual: &[u8], predicted: &[u8]) -> Result<f64> {
    if actual.len() != predicted.len() {
        return Err(MLError::DimensionMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        }
        .into());
    }
    if actual.is_empty() {
        return Err(MLError::InvalidParameter {
            name: "actual".to_string(),
            message: "cannot score an empty set".to_string(),
        }
        .into());
    }

    let correct = actual
        .iter()
        .zip(predicted)
        .filter(|(a, p)| a == p)
        .count();
    Ok(correct as f64 / actual.len() as f64)
}

/// Mean of a non-empty sample.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of a non-empty sample.
pub(crate) fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| {
            let centered = value - mean;
            centered * centered
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

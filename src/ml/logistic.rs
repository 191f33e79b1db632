//! L2 regularized logistic regression.
//!
//! The model is fitted with batch gradient descent on the mean log loss
//! plus an L2 penalty of `1 / (2 * C * n)` times the squared weight norm,
//! so `C` is the inverse regularization strength: larger values mean a
//! weaker penalty. The intercept is never penalized.
//!
//! Features are standardized internally from the training statistics
//! (zero-variance columns keep a unit scale) so that the raw `Age` column
//! and the one-hot indicators descend at comparable rates. Predictions
//! apply the same transform, so callers always work in raw feature space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::dataset::FeatureMatrix;
use crate::ml::{Classifier, MLError, ModelMetadata};

/// Default inverse regularization strength.
pub const DEFAULT_C: f64 = 1.0;

const DEFAULT_LEARNING_RATE: f64 = 0.1;
const DEFAULT_MAX_ITERATIONS: usize = 1000;
const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Parameters produced by a fit, in training feature space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FittedParameters {
    weights: Vec<f64>,
    intercept: f64,
    means: Vec<f64>,
    scales: Vec<f64>,
}

/// Binary logistic regression with L2 regularization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    c: f64,
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    fitted: Option<FittedParameters>,
    #[serde(skip)]
    metadata: Option<ModelMetadata>,
}

impl LogisticRegression {
    /// Creates an unfitted model with [`DEFAULT_C`].
    pub fn new() -> Self {
        Self {
            c: DEFAULT_C,
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            fitted: None,
            metadata: None,
        }
    }

    /// Creates an unfitted model with the given inverse regularization
    /// strength.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] unless `c` is positive and
    /// finite.
    pub fn with_c(c: f64) -> Result<Self> {
        if !c.is_finite() || c <= 0.0 {
            return Err(MLError::InvalidParameter {
                name: "C".to_string(),
                message: format!("must be a positive finite number, got {c}"),
            }
            .into());
        }
        let mut model = Self::new();
        model.c = c;
        Ok(model)
    }

    /// Sets the gradient descent step size.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] unless the rate is positive and
    /// finite.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(MLError::InvalidParameter {
                name: "learning_rate".to_string(),
                message: format!("must be a positive finite number, got {learning_rate}"),
            }
            .into());
        }
        self.learning_rate = learning_rate;
        Ok(self)
    }

    /// Sets the iteration cap for gradient descent.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] for a zero cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(MLError::InvalidParameter {
                name: "max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    /// Sets the convergence tolerance on the largest gradient component.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] unless the tolerance is
    /// non-negative and finite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(MLError::InvalidParameter {
                name: "tolerance".to_string(),
                message: format!("must be a non-negative finite number, got {tolerance}"),
            }
            .into());
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// The inverse regularization strength.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Fitted weights in raw feature order, once fitted.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|f| f.weights.as_slice())
    }

    /// Fitted intercept, once fitted.
    pub fn intercept(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.intercept)
    }

    /// Metadata recorded by the last fit.
    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }

    /// Survival probability for every row, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::NotFitted`] before a fit and
    /// [`MLError::DimensionMismatch`] when the matrix width differs from the
    /// training width.
    pub fn predict_proba(&self, features: &FeatureMatrix) -> Result<Vec<f64>> {
        let fitted = self.fitted.as_ref().ok_or_else(|| MLError::NotFitted {
            message: "call fit before predict".to_string(),
        })?;
        if features.n_cols() != fitted.weights.len() {
            return Err(MLError::DimensionMismatch {
                expected: fitted.weights.len(),
                actual: features.n_cols(),
            }
            .into());
        }

        Ok(features
            .rows()
            .iter()
            .map(|row| {
                let scaled = scale_row(row, &fitted.means, &fitted.scales);
                sigmoid(dot(&fitted.weights, &scaled) + fitted.intercept)
            })
            .collect())
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, features: &FeatureMatrix, labels: &[u8]) -> Result<()> {
        if labels.is_empty() {
            return Err(MLError::InsufficientTrainingData {
                min_samples: 1,
                actual: 0,
            }
            .into());
        }
        if features.n_rows() != labels.len() {
            return Err(MLError::DimensionMismatch {
                expected: features.n_rows(),
                actual: labels.len(),
            }
            .into());
        }
        if let Some(&bad) = labels.iter().find(|&&label| label > 1) {
            return Err(MLError::InvalidParameter {
                name: "labels".to_string(),
                message: format!("labels must be 0 or 1, got {bad}"),
            }
            .into());
        }

        let n = labels.len();
        let n_cols = features.n_cols();
        let (means, scales) = standardization(features);
        let scaled: Vec<Vec<f64>> = features
            .rows()
            .iter()
            .map(|row| scale_row(row, &means, &scales))
            .collect();
        let targets: Vec<f64> = labels.iter().map(|&label| label as f64).collect();

        let mut weights = vec![0.0; n_cols];
        let mut intercept = 0.0;
        let penalty = 1.0 / (self.c * n as f64);
        let inv_n = 1.0 / n as f64;

        let mut iterations = 0;
        for _ in 0..self.max_iterations {
            iterations += 1;

            let mut weight_grads = vec![0.0; n_cols];
            let mut intercept_grad = 0.0;
            for (row, &target) in scaled.iter().zip(&targets) {
                let error = sigmoid(dot(&weights, row) + intercept) - target;
                for (grad, &value) in weight_grads.iter_mut().zip(row) {
                    *grad += error * value;
                }
                intercept_grad += error;
            }

            let mut max_step = 0.0f64;
            for (weight, grad_sum) in weights.iter_mut().zip(&weight_grads) {
                let grad = grad_sum * inv_n + penalty * *weight;
                *weight -= self.learning_rate * grad;
                max_step = max_step.max(grad.abs());
            }
            let grad = intercept_grad * inv_n;
            intercept -= self.learning_rate * grad;
            max_step = max_step.max(grad.abs());

            if max_step < self.tolerance {
                break;
            }
        }
        log::debug!(
            "Gradient descent finished after {} iterations (C = {})",
            iterations,
            self.c
        );

        self.fitted = Some(FittedParameters {
            weights,
            intercept,
            means,
            scales,
        });
        self.metadata = Some(ModelMetadata {
            name: "LogisticRegression".to_string(),
            trained_at: chrono::Utc::now(),
            training_examples: n,
            hyperparameters: HashMap::from([
                ("C".to_string(), self.c),
                ("learning_rate".to_string(), self.learning_rate),
                ("max_iterations".to_string(), self.max_iterations as f64),
            ]),
        });
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<u8>> {
        Ok(self
            .predict_proba(features)?
            .into_iter()
            .map(|probability| u8::from(probability >= 0.5))
            .collect())
    }
}

/// Per-column mean and scale of the training matrix. The scale is the
/// population standard deviation, or 1.0 for a constant column.
fn standardization(features: &FeatureMatrix) -> (Vec<f64>, Vec<f64>) {
    let n = features.n_rows() as f64;
    let n_cols = features.n_cols();

    let mut means = vec![0.0; n_cols];
    for row in features.rows() {
        for (mean, &value) in means.iter_mut().zip(row) {
            *mean += value;
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    let mut variances = vec![0.0; n_cols];
    for row in features.rows() {
        for ((variance, &value), &mean) in variances.iter_mut().zip(row).zip(&means) {
            let centered = value - mean;
            *variance += centered * centered;
        }
    }
    let scales = variances
        .into_iter()
        .map(|variance| {
            let std = (variance / n).sqrt();
            if std > 0.0 { std } else { 1.0 }
        })
        .collect();

    (means, scales)
}

fn scale_row(row: &[f64], means: &[f64], scales: &[f64]) -> Vec<f64> {
    row.iter()
        .zip(means)
        .zip(scales)
        .map(|((&value, &mean), &scale)| (value - mean) / scale)
        .collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

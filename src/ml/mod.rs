//! Statistical models for survival prediction.
//!
//! This module provides the modelling half of the analysis: feature
//! encoding and dataset splitting, a majority-vote baseline, an L2
//! regularized logistic regression, cross-validated selection of the
//! regularization strength, and accuracy scoring.

pub mod baseline;
pub mod dataset;
pub mod logistic;
pub mod metrics;
pub mod search;

pub use baseline::*;
pub use dataset::*;
pub use logistic::*;
pub use metrics::*;
pub use search::*;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Trait for binary survival classifiers.
pub trait Classifier: Send + Sync {
    /// Fit the model on a feature matrix and its labels.
    fn fit(&mut self, features: &FeatureMatrix, labels: &[u8]) -> Result<()>;

    /// Predict a label (0 or 1) for every row of the feature matrix.
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<u8>>;
}

/// Model metadata recorded at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier.
    pub name: String,
    /// Fit timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Model hyperparameters.
    pub hyperparameters: HashMap<String, f64>,
}

/// Machine learning error types.
#[derive(Debug, thiserror::Error)]
pub enum MLError {
    #[error("Model not fitted: {message}")]
    NotFitted { message: String },

    #[error("Training data insufficient: need at least {min_samples} samples, got {actual}")]
    InsufficientTrainingData { min_samples: usize, actual: usize },

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ml_error_messages() {
        let err = MLError::NotFitted {
            message: "call fit before predict".to_string(),
        };
        assert_eq!(err.to_string(), "Model not fitted: call fit before predict");

        let err = MLError::InsufficientTrainingData {
            min_samples: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Training data insufficient: need at least 2 samples, got 1"
        );
    }

    #[test]
    fn test_model_metadata_creation() {
        let metadata = ModelMetadata {
            name: "LogisticRegression".to_string(),
            trained_at: chrono::Utc::now(),
            training_examples: 100,
            hyperparameters: HashMap::from([("C".to_string(), 1.0)]),
        };

        assert_eq!(metadata.name, "LogisticRegression");
        assert_eq!(metadata.training_examples, 100);
        assert_eq!(metadata.hyperparameters.get("C"), Some(&1.0));
    }
}

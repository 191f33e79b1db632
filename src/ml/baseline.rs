//! Majority-vote baseline classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::dataset::FeatureMatrix;
use crate::ml::{Classifier, MLError, ModelMetadata};

/// Predicts the most common training label for every example.
///
/// Any model worth keeping has to beat this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorityVote {
    prediction: Option<u8>,
    #[serde(skip)]
    metadata: Option<ModelMetadata>,
}

impl MajorityVote {
    /// Creates an unfitted baseline.
    pub fn new() -> Self {
        Self {
            prediction: None,
            metadata: None,
        }
    }

    /// The label the baseline predicts, once fitted.
    pub fn majority_label(&self) -> Option<u8> {
        self.prediction
    }

    /// Metadata recorded by the last fit.
    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.metadata.as_ref()
    }
}

impl Default for MajorityVote {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MajorityVote {
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

        // Rounding the label mean gives the majority class; an exact tie
        // rounds up to 1.
        let mean = labels.iter().map(|&label| label as f64).sum::<f64>() / labels.len() as f64;
        self.prediction = Some(mean.round() as u8);
        self.metadata = Some(ModelMetadata {
            name: "MajorityVote".to_string(),
            trained_at: chrono::Utc::now(),
            training_examples: labels.len(),
            hyperparameters: HashMap::new(),
        });
        Ok(())
    }

    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<u8>> {
        let vote = self.prediction.ok_or_else(|| MLError::NotFitted {
            message: "call fit before predict".to_string(),
        })?;
        Ok(vec![vote; features.n_rows()])
    }
}

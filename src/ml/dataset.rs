//! Feature encoding and dataset splitting.
//!
//! The feature matrix uses a fixed column layout: the numeric `Age` column
//! first, then one-hot indicator columns for `Sex` and `Title` in the
//! category order of [`Sex::ALL`] and [`Title::ALL`]. Splitting is seeded so
//! that a run can be reproduced exactly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::data::record::{Sex, TitledPassenger};
use crate::data::title::Title;
use crate::error::Result;
use crate::ml::MLError;

/// Column labels of the encoded feature matrix, in column order.
pub fn feature_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(1 + Sex::ALL.len() + Title::ALL.len());
    columns.push("Age".to_string());
    for sex in Sex::ALL {
        columns.push(format!("Sex_{sex}"));
    }
    for title in Title::ALL {
        columns.push(format!("Title_{title}"));
    }
    columns
}

/// A dense numeric matrix with labeled columns.
///
/// Every row has exactly as many values as there are columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Creates a matrix from raw columns and rows.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::DimensionMismatch`] when a row width does not
    /// match the number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        for row in &rows {
            if row.len() != columns.len() {
                return Err(MLError::DimensionMismatch {
                    expected: columns.len(),
                    actual: row.len(),
                }
                .into());
            }
        }
        Ok(Self { columns, rows })
    }

    /// Encodes passengers into the fixed one-hot layout.
    pub fn from_passengers(passengers: &[TitledPassenger]) -> Self {
        log::info!("Transforming the categorical variables into numerical variables");
        Self {
            columns: feature_columns(),
            rows: passengers.iter().map(encode_row).collect(),
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// A single row.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }
}

fn encode_row(passenger: &TitledPassenger) -> Vec<f64> {
    let mut row = Vec::with_capacity(1 + Sex::ALL.len() + Title::ALL.len());
    row.push(passenger.record.age);
    for sex in Sex::ALL {
        row.push(if passenger.record.sex == sex { 1.0 } else { 0.0 });
    }
    for title in Title::ALL {
        row.push(if passenger.title == title { 1.0 } else { 0.0 });
    }
    row
}

/// A feature matrix together with its survival labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Encoded features, one row per passenger.
    pub features: FeatureMatrix,
    /// Survival labels aligned with the feature rows.
    pub labels: Vec<u8>,
}

impl Dataset {
    /// Builds the dataset from titled passengers.
    pub fn from_titled(passengers: &[TitledPassenger]) -> Self {
        Self {
            features: FeatureMatrix::from_passengers(passengers),
            labels: passengers.iter().map(|p| p.record.survived).collect(),
        }
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the dataset has no examples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Splits into `(train, test)` with a seeded shuffle.
    ///
    /// The test partition receives `ceil(len * test_size)` examples; the
    /// rest go to the train partition. The same seed always produces the
    /// same split.
    ///
    /// # Errors
    ///
    /// Returns [`MLError::InvalidParameter`] when `test_size` is outside
    /// `(0, 1)` or leaves the train partition empty, and
    /// [`MLError::InsufficientTrainingData`] for datasets with fewer than
    /// two examples.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Dataset, Dataset)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(MLError::InvalidParameter {
                name: "test_size".to_string(),
                message: format!("must be strictly between 0 and 1, got {test_size}"),
            }
            .into());
        }
        let n = self.len();
        if n < 2 {
            return Err(MLError::InsufficientTrainingData {
                min_samples: 2,
                actual: n,
            }
            .into());
        }
        let n_test = ((n as f64) * test_size).ceil() as usize;
        if n_test >= n {
            return Err(MLError::InvalidParameter {
                name: "test_size".to_string(),
                message: format!("leaves no training rows for {n} samples"),
            }
            .into());
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let test = self.subset(&indices[..n_test]);
        let train = self.subset(&indices[n_test..]);
        log::info!(
            "Split {} passengers into {} train and {} test",
            n,
            train.len(),
            test.len()
        );
        Ok((train, test))
    }

    /// Copies the examples at `indices` into a new dataset, in index order.
    ///
    /// Indices must be in range.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: FeatureMatrix {
                columns: self.features.columns.clone(),
                rows: indices
                    .iter()
                    .map(|&i| self.features.rows[i].clone())
                    .collect(),
            },
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Passenger;

    fn titled(age: f64, sex: Sex, title: Title, survived: u8) -> TitledPassenger {
        TitledPassenger {
            record: Passenger {
                name: format!("Passenger, {title}. {age}"),
                sex,
                age,
                survived,
            },
            title,
        }
    }

    fn sample_dataset(n: usize) -> Dataset {
        let passengers: Vec<TitledPassenger> = (0..n)
            .map(|i| titled(i as f64, Sex::Male, Title::Mr, (i % 2) as u8))
            .collect();
        Dataset::from_titled(&passengers)
    }

    #[test]
    fn test_feature_columns_layout() {
        let columns = feature_columns();
        assert_eq!(
            columns,
            vec![
                "Age",
                "Sex_female",
                "Sex_male",
                "Title_Master",
                "Title_Miss",
                "Title_Mr",
                "Title_Mrs",
                "Title_Officer",
                "Title_Royalty",
            ]
        );
    }

    #[test]
    fn test_one_hot_encoding() {
        let passengers = vec![titled(26.0, Sex::Female, Title::Miss, 1)];
        let matrix = FeatureMatrix::from_passengers(&passengers);

        assert_eq!(matrix.n_rows(), 1);
        assert_eq!(matrix.n_cols(), 9);
        assert_eq!(
            matrix.row(0),
            &[26.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let result = FeatureMatrix::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_split_sizes() {
        let dataset = sample_dataset(10);
        let (train, test) = dataset.train_test_split(0.25, 0).unwrap();
        assert_eq!(test.len(), 3);
        assert_eq!(train.len(), 7);
        assert_eq!(test.features.n_rows(), 3);
        assert_eq!(train.features.n_rows(), 7);
    }

    #[test]
    fn test_split_is_deterministic_and_complete() {
        let dataset = sample_dataset(12);
        let (train_a, test_a) = dataset.train_test_split(0.25, 42).unwrap();
        let (train_b, test_b) = dataset.train_test_split(0.25, 42).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);

        // Every original row appears exactly once across the two partitions.
        let mut ages: Vec<f64> = train_a
            .features
            .rows()
            .iter()
            .chain(test_a.features.rows())
            .map(|row| row[0])
            .collect();
        ages.sort_by(f64::total_cmp);
        let expected: Vec<f64> = (0..12).map(|i| i as f64).collect();
        assert_eq!(ages, expected);
    }

    #[test]
    fn test_split_rejects_bad_test_size() {
        let dataset = sample_dataset(10);
        assert!(dataset.train_test_split(0.0, 0).is_err());
        assert!(dataset.train_test_split(1.0, 0).is_err());
        assert!(dataset.train_test_split(-0.5, 0).is_err());
        assert!(dataset.train_test_split(f64::NAN, 0).is_err());
    }

    #[test]
    fn test_split_rejects_tiny_dataset() {
        let dataset = sample_dataset(1);
        assert!(dataset.train_test_split(0.25, 0).is_err());
    }
}

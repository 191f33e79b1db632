//! # Titanic
//!
//! Baseline survival analysis for the Titanic passenger dataset.
//!
//! ## Features
//!
//! - CSV loading with median age imputation
//! - Title extraction from passenger names
//! - One-hot feature encoding with a fixed column layout
//! - Seeded train/test splitting and k-fold cross-validation
//! - Majority-vote baseline and L2 regularized logistic regression
//! - Grid search over the regularization strength

pub mod cli;
pub mod data;
pub mod error;
pub mod ml;
pub mod pipeline;

pub mod prelude {
    //! Convenient re-exports for typical analysis runs.

    pub use crate::data::{
        Passenger, Sex, Title, TitledPassenger, extract_title, extract_titles, load_passengers,
    };
    pub use crate::error::{Result, TitanicError};
    pub use crate::ml::{
        Classifier, Dataset, FeatureMatrix, LogisticRegression, MajorityVote, accuracy_score,
    };
    pub use crate::pipeline::{AnalysisConfig, AnalysisReport, run_analysis};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

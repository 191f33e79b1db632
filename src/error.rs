//! Error types for the titanic library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`TitanicError`] enum. Domain-specific failures (data preparation,
//! model fitting) have their own enums and convert into the crate-wide error
//! through `From`.
//!
//! # Examples
//!
//! ```
//! use titanic::error::{Result, TitanicError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TitanicError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::data::DataError;
use crate::ml::MLError;

/// The main error type for titanic operations.
#[derive(Error, Debug)]
pub enum TitanicError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data preparation errors (loading, title extraction)
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Model training and prediction errors
    #[error("Model error: {0}")]
    Model(#[from] MLError),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TitanicError.
pub type Result<T> = std::result::Result<T, TitanicError>;

impl TitanicError {
    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TitanicError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TitanicError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        TitanicError::Other(format!("Not found: {}", msg.into()))
    }
}

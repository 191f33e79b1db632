//! Passenger data handling for the survival analysis.
//!
//! This module covers everything between the raw CSV file and the model
//! input: parsing rows into [`Passenger`] records, deriving the categorical
//! [`Title`] feature from the free-text name column, and the strict
//! validation both steps perform.

pub mod loader;
pub mod record;
pub mod title;

pub use loader::*;
pub use record::*;
pub use title::*;

/// Data preparation error types.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Unknown honorific {token:?} in name {name:?}")]
    UnknownTitle { token: String, name: String },

    #[error("Malformed name {name:?}: expected \"Surname, Title. Given names\"")]
    MalformedName { name: String },

    #[error("Missing required column {column:?}")]
    MissingColumn { column: String },

    #[error("Invalid value {value:?} in column {column:?}")]
    InvalidValue { column: String, value: String },

    #[error("Dataset contains no rows")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_messages() {
        let error = DataError::UnknownTitle {
            token: "Duke".to_string(),
            name: "Wellington, Duke. of".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown honorific \"Duke\" in name \"Wellington, Duke. of\""
        );

        let error = DataError::MissingColumn {
            column: "Survived".to_string(),
        };
        assert_eq!(error.to_string(), "Missing required column \"Survived\"");
    }
}

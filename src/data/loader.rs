//! CSV loading for the passenger dataset.
//!
//! The loader reads the standard dataset layout (one header row, one
//! passenger per line) and keeps only the columns the analysis uses:
//! `Name`, `Sex`, `Age` and `Survived`. Any other columns are ignored.
//! Missing ages are filled with the median of the known ages so that the
//! feature matrix never contains holes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::data::DataError;
use crate::data::record::{Passenger, Sex};
use crate::error::Result;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Name", "Sex", "Age", "Survived"];

/// One CSV row before age imputation. Columns are matched by header name.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sex")]
    sex: Sex,
    #[serde(rename = "Age")]
    age: Option<f64>,
    #[serde(rename = "Survived")]
    survived: u8,
}

/// Loads passengers from a CSV file on disk.
///
/// See [`read_passengers`] for the parsing and imputation rules.
pub fn load_passengers(path: impl AsRef<Path>) -> Result<Vec<Passenger>> {
    let path = path.as_ref();
    log::info!("Loading the dataset from {}", path.display());
    let file = File::open(path)?;
    read_passengers(BufReader::new(file))
}

/// Reads passengers from any CSV source.
///
/// The header row is validated against [`REQUIRED_COLUMNS`] before any row
/// is parsed. Rows with an empty `Age` field are imputed with the median of
/// the known ages, matching the usual treatment of this dataset.
///
/// # Errors
///
/// Fails with [`DataError::MissingColumn`] when a required column is absent,
/// [`DataError::Empty`] when the file holds no rows,
/// [`DataError::InvalidValue`] for a label outside `{0, 1}`, a negative or
/// non-finite age, or an `Age` column with no values to take a median from.
pub fn read_passengers<R: Read>(reader: R) -> Result<Vec<Passenger>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|field| field == column) {
            return Err(DataError::MissingColumn {
                column: column.to_string(),
            }
            .into());
        }
    }

    let mut rows: Vec<RawRecord> = Vec::new();
    for row in csv_reader.deserialize() {
        let row: RawRecord = row?;
        if row.survived > 1 {
            return Err(DataError::InvalidValue {
                column: "Survived".to_string(),
                value: row.survived.to_string(),
            }
            .into());
        }
        if let Some(age) = row.age {
            if !age.is_finite() || age < 0.0 {
                return Err(DataError::InvalidValue {
                    column: "Age".to_string(),
                    value: age.to_string(),
                }
                .into());
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataError::Empty.into());
    }

    let known_ages: Vec<f64> = rows.iter().filter_map(|row| row.age).collect();
    if known_ages.is_empty() {
        return Err(DataError::InvalidValue {
            column: "Age".to_string(),
            value: "no values present".to_string(),
        }
        .into());
    }
    let missing = rows.len() - known_ages.len();
    let median_age = median(known_ages);
    if missing > 0 {
        log::info!("Filled {missing} missing ages with the median age {median_age:.1}");
    }

    Ok(rows
        .into_iter()
        .map(|row| Passenger {
            name: row.name,
            sex: row.sex,
            age: row.age.unwrap_or(median_age),
            survived: row.survived,
        })
        .collect())
}

/// Median of a non-empty sample; the mean of the two middle values when the
/// count is even.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

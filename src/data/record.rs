//! Passenger record types.
//!
//! A [`Passenger`] is one row of the input CSV after type coercion; a
//! [`TitledPassenger`] is the same row augmented with the categorical
//! [`Title`](crate::data::title::Title) derived from the name column. The
//! augmented form is a new value, the source record is never modified.

use serde::{Deserialize, Serialize};

use crate::data::title::Title;

/// Passenger sex as recorded in the dataset.
///
/// Deserializes from the lowercase values used in the CSV (`female`/`male`);
/// capitalized spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Male")]
    Male,
}

impl Sex {
    /// All categories in feature-column order (alphabetical).
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Lowercase category name, as used in one-hot column labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One passenger row with the fields the analysis consumes.
///
/// `age` is always present here: missing values are filled with the column
/// median by the loader. `survived` is the binary label (0 or 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Free-text name, `"Surname, Title. Given names"`.
    pub name: String,
    /// Passenger sex.
    pub sex: Sex,
    /// Age in years (median-imputed when missing in the source).
    pub age: f64,
    /// Survival label: 1 survived, 0 did not.
    pub survived: u8,
}

/// A passenger augmented with the derived title category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledPassenger {
    /// The source record, unchanged.
    pub record: Passenger,
    /// Canonical title category extracted from `record.name`.
    pub title: Title,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_display() {
        assert_eq!(Sex::Female.to_string(), "female");
        assert_eq!(Sex::Male.to_string(), "male");
    }

    #[test]
    fn test_sex_deserialization_aliases() {
        let sex: Sex = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(sex, Sex::Male);

        let sex: Sex = serde_json::from_str("\"Female\"").unwrap();
        assert_eq!(sex, Sex::Female);
    }

    #[test]
    fn test_passenger_roundtrip() {
        let passenger = Passenger {
            name: "Heikkinen, Miss. Laina".to_string(),
            sex: Sex::Female,
            age: 26.0,
            survived: 1,
        };

        let json = serde_json::to_string(&passenger).unwrap();
        let parsed: Passenger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, passenger);
    }
}

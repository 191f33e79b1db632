//! Title extraction from passenger names.
//!
//! Names in the dataset follow the pattern `"Surname, Title. Given names"`.
//! The token between the first comma and the first period is an honorific
//! (`Mr`, `Mlle`, `the Countess`, ...), and the fixed table in this module
//! folds the 18 honorifics that occur in the data into six canonical
//! categories. An honorific outside the table is an error, not a default:
//! new data with an unexpected title should fail loudly.

use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::data::DataError;
use crate::data::record::{Passenger, TitledPassenger};

/// Canonical title category, the social-status signal used as a feature.
///
/// Variants are ordered alphabetically, which is also the one-hot column
/// order of the feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Title {
    Master,
    Miss,
    Mr,
    Mrs,
    Officer,
    Royalty,
}

impl Title {
    /// All categories in one-hot column order.
    pub const ALL: [Title; 6] = [
        Title::Master,
        Title::Miss,
        Title::Mr,
        Title::Mrs,
        Title::Officer,
        Title::Royalty,
    ];

    /// Category name, as used in one-hot column labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Master => "Master",
            Title::Miss => "Miss",
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Officer => "Officer",
            Title::Royalty => "Royalty",
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Honorific table: every raw honorific in the dataset and its category.
pub const HONORIFIC_TABLE: &[(&str, Title)] = &[
    ("Capt", Title::Officer),
    ("Col", Title::Officer),
    ("Major", Title::Officer),
    ("Jonkheer", Title::Royalty),
    ("Don", Title::Royalty),
    ("Sir", Title::Royalty),
    ("Dr", Title::Officer),
    ("Rev", Title::Officer),
    ("the Countess", Title::Royalty),
    ("Dona", Title::Royalty),
    ("Mme", Title::Mrs),
    ("Mlle", Title::Miss),
    ("Ms", Title::Mrs),
    ("Mr", Title::Mr),
    ("Mrs", Title::Mrs),
    ("Miss", Title::Miss),
    ("Master", Title::Master),
    ("Lady", Title::Royalty),
];

/// Honorific lookup map built from [`HONORIFIC_TABLE`].
pub static TITLE_MAP: LazyLock<AHashMap<&'static str, Title>> =
    LazyLock::new(|| HONORIFIC_TABLE.iter().copied().collect());

/// Extracts the canonical title from a full passenger name.
///
/// The honorific is the text between the first comma and the first period,
/// with surrounding whitespace trimmed. Lookup is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use titanic::data::{extract_title, Title};
///
/// let title = extract_title("Braund, Mr. Owen Harris").unwrap();
/// assert_eq!(title, Title::Mr);
/// ```
///
/// # Errors
///
/// Returns [`DataError::MalformedName`] when the name has no comma or no
/// period after the comma, and [`DataError::UnknownTitle`] when the
/// honorific is not in the table.
pub fn extract_title(name: &str) -> Result<Title, DataError> {
    let (_, after_comma) = name.split_once(',').ok_or_else(|| DataError::MalformedName {
        name: name.to_string(),
    })?;
    let (raw_token, _) = after_comma
        .split_once('.')
        .ok_or_else(|| DataError::MalformedName {
            name: name.to_string(),
        })?;
    let token = raw_token.trim();

    TITLE_MAP
        .get(token)
        .copied()
        .ok_or_else(|| DataError::UnknownTitle {
            token: token.to_string(),
            name: name.to_string(),
        })
}

/// Derives the title for every record, preserving order.
///
/// Fails on the first name that cannot be mapped, leaving no partially
/// titled output behind.
pub fn extract_titles(records: Vec<Passenger>) -> Result<Vec<TitledPassenger>, DataError> {
    log::info!("Extracting the titles from the name column");
    records
        .into_iter()
        .map(|record| {
            let title = extract_title(&record.name)?;
            Ok(TitledPassenger { record, title })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::Sex;

    fn passenger(name: &str) -> Passenger {
        Passenger {
            name: name.to_string(),
            sex: Sex::Male,
            age: 30.0,
            survived: 0,
        }
    }

    #[test]
    fn test_table_covers_all_honorifics() {
        assert_eq!(HONORIFIC_TABLE.len(), 18);
        for (token, title) in HONORIFIC_TABLE {
            assert_eq!(TITLE_MAP.get(token), Some(title));
        }
    }

    #[test]
    fn test_extract_title_simple() {
        assert_eq!(
            extract_title("Braund, Mr. Owen Harris").unwrap(),
            Title::Mr
        );
        assert_eq!(
            extract_title("Heikkinen, Miss. Laina").unwrap(),
            Title::Miss
        );
        assert_eq!(
            extract_title("Palsson, Master. Gosta Leonard").unwrap(),
            Title::Master
        );
    }

    #[test]
    fn test_extract_title_folds_variants() {
        assert_eq!(
            extract_title("Aubart, Mme. Leontine Pauline").unwrap(),
            Title::Mrs
        );
        assert_eq!(
            extract_title("Reynaldo, Ms. Encarnacion").unwrap(),
            Title::Mrs
        );
        assert_eq!(
            extract_title("Sagesser, Mlle. Emma").unwrap(),
            Title::Miss
        );
    }

    #[test]
    fn test_extract_title_multiword_honorific() {
        let name = "Rothes, the Countess. of (Lucy Noel Martha Dyer-Edwards)";
        assert_eq!(extract_title(name).unwrap(), Title::Royalty);
    }

    #[test]
    fn test_extract_title_trims_whitespace() {
        assert_eq!(
            extract_title("Minahan,  Dr . William Edward").unwrap(),
            Title::Officer
        );
    }

    #[test]
    fn test_extract_title_unknown_honorific() {
        let err = extract_title("Nasser, Professor. Nicholas").unwrap_err();
        match err {
            DataError::UnknownTitle { token, name } => {
                assert_eq!(token, "Professor");
                assert_eq!(name, "Nasser, Professor. Nicholas");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_title_case_sensitive() {
        let err = extract_title("Braund, mr. Owen Harris").unwrap_err();
        assert!(matches!(err, DataError::UnknownTitle { .. }));
    }

    #[test]
    fn test_extract_title_malformed_name() {
        assert!(matches!(
            extract_title("no separators at all"),
            Err(DataError::MalformedName { .. })
        ));
        assert!(matches!(
            extract_title("Braund, Owen Harris"),
            Err(DataError::MalformedName { .. })
        ));
    }

    #[test]
    fn test_extract_titles_preserves_order() {
        let records = vec![
            passenger("Braund, Mr. Owen Harris"),
            passenger("Palsson, Master. Gosta Leonard"),
            passenger("Uruchurtu, Don. Manuel E"),
        ];

        let titled = extract_titles(records).unwrap();
        assert_eq!(titled.len(), 3);
        assert_eq!(titled[0].title, Title::Mr);
        assert_eq!(titled[1].title, Title::Master);
        assert_eq!(titled[2].title, Title::Royalty);
        assert_eq!(titled[0].record.name, "Braund, Mr. Owen Harris");
    }

    #[test]
    fn test_extract_titles_fails_fast() {
        let records = vec![
            passenger("Braund, Mr. Owen Harris"),
            passenger("Nasser, Professor. Nicholas"),
        ];

        assert!(extract_titles(records).is_err());
    }
}

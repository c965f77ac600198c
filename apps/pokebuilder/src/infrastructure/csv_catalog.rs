use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::creature::{BaseStats, CatalogStore, Creature};
use crate::domain::errors::{CatalogResult, DataSourceError};

/// Columns the catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Name", "Type 1", "Type 2", "HP", "Attack", "Defense", "Sp. Atk", "Sp. Def", "Speed", "#",
];

/// One catalog row as it appears in the file
///
/// Columns not listed here (`Total` for instance) are ignored.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "#")]
    number: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type 1")]
    type1: String,
    #[serde(rename = "Type 2")]
    type2: Option<String>,
    #[serde(rename = "HP")]
    hp: u32,
    #[serde(rename = "Attack")]
    attack: u32,
    #[serde(rename = "Defense")]
    defense: u32,
    #[serde(rename = "Sp. Atk")]
    special_attack: u32,
    #[serde(rename = "Sp. Def")]
    special_defense: u32,
    #[serde(rename = "Speed")]
    speed: u32,
    #[serde(rename = "Generation", default)]
    generation: Option<u32>,
    #[serde(rename = "Legendary", default, deserialize_with = "deserialize_flag")]
    legendary: Option<bool>,
}

impl From<CatalogRow> for Creature {
    fn from(row: CatalogRow) -> Self {
        let stats = BaseStats {
            hp: row.hp,
            attack: row.attack,
            defense: row.defense,
            special_attack: row.special_attack,
            special_defense: row.special_defense,
            speed: row.speed,
        };
        Creature::new(row.number, row.name, row.type1, row.type2, stats)
            .with_details(row.generation, row.legendary)
    }
}

/// Accepts `True`/`False` in any case as well as `1`/`0`; empty means unknown
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if s == "true" || s == "1" => Ok(Some(true)),
        Some(s) if s == "false" || s == "0" => Ok(Some(false)),
        Some(s) => Err(serde::de::Error::custom(format!(
            "invalid Legendary flag: {}",
            s
        ))),
    }
}

impl CatalogStore {
    /// Loads the catalog from a CSV file
    ///
    /// # Errors
    /// * `DataSourceError::NotFound` - The file does not exist
    /// * `DataSourceError::Unreadable` - The file exists but cannot be opened
    /// * `DataSourceError::Malformed` - A required column is missing or a row
    ///   cannot be parsed
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataSourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| DataSourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(file).map_err(|e| match e {
            DataSourceError::InvalidData { reason } => DataSourceError::Malformed {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            records = store.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Parses catalog CSV from any reader
    ///
    /// # Errors
    /// * `DataSourceError::InvalidData` - A required column is missing or a
    ///   row cannot be parsed. [`CatalogStore::load`] turns it into
    ///   `Malformed` with the file path attached.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let invalid = |reason: String| DataSourceError::InvalidData { reason };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| invalid(format!("cannot read header row: {}", e)))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(invalid(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for (row, result) in reader.deserialize::<CatalogRow>().enumerate() {
            // Row numbers are 1-based and count the header line
            let row = result.map_err(|e| invalid(format!("row {}: {}", row + 2, e)))?;
            records.push(Creature::from(row));
        }

        Ok(Self::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::creature::Stat;
    use std::io::Write;

    const HEADER: &str =
        "#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary";

    fn parse(body: &str) -> CatalogResult<CatalogStore> {
        CatalogStore::from_reader(format!("{}\n{}", HEADER, body).as_bytes())
    }

    #[test]
    fn parses_rows_in_file_order() {
        let store = parse(
            "25,Pikachu,Electric,,320,35,55,40,50,50,90,1,False\n\
             1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,False\n",
        )
        .unwrap();

        assert_eq!(store.names(), vec!["Pikachu", "Bulbasaur"]);
        let pika = &store.records()[0];
        assert_eq!(pika.type2(), None);
        assert_eq!(pika.stat(Stat::Speed), 90);
        assert_eq!(pika.generation(), Some(1));
        assert_eq!(pika.legendary(), Some(false));
        assert_eq!(store.records()[1].type2(), Some("Poison"));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let body = "#,Name,Type 1,Type 2,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed\n\
                    150,Mewtwo,Psychic,,106,110,90,154,90,130\n";
        let store = CatalogStore::from_reader(body.as_bytes()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].generation(), None);
        assert_eq!(store.records()[0].legendary(), None);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let body = "#,Name,Type 1,HP\n1,Bulbasaur,Grass,45\n";
        let err = CatalogStore::from_reader(body.as_bytes()).unwrap_err();

        match err {
            DataSourceError::InvalidData { reason } => {
                assert!(reason.contains("Type 2"));
                assert!(reason.contains("Speed"));
            }
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_stat_is_reported_with_row() {
        let err = parse("1,Bulbasaur,Grass,Poison,318,lots,49,49,65,65,45,1,False\n").unwrap_err();
        match err {
            DataSourceError::InvalidData { reason } => assert!(reason.starts_with("row 2")),
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn legendary_flag_accepts_common_spellings() {
        let store = parse(
            "144,Articuno,Ice,Flying,580,90,85,100,95,125,85,1,TRUE\n\
             145,Zapdos,Electric,Flying,580,90,90,85,125,90,100,1,1\n",
        )
        .unwrap();
        assert!(store.records().iter().all(|c| c.legendary() == Some(true)));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogStore::load(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::NotFound { .. }));
    }

    #[test]
    fn load_malformed_file_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Type 1").unwrap();
        writeln!(file, "Bulbasaur,Grass").unwrap();

        let err = CatalogStore::load(file.path()).unwrap_err();
        match err {
            DataSourceError::Malformed { path, reason } => {
                assert_eq!(path, file.path());
                assert!(reason.contains("missing required columns"));
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }
}

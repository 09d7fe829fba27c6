//! Generic catalog CSV parser.
//!
//! Provides a streaming parser for the comma-separated catalog files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{CatalogConfig, CatalogError, CatalogResult};

/// Trait for types that can be parsed from catalog CSV records.
pub trait CsvRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> CatalogResult<Self>;
}

/// A streaming parser for catalog files.
pub struct CatalogParser<R: Read, T: CsvRecord> {
    reader: Reader<R>,
    _marker: PhantomData<T>,
}

impl<T: CsvRecord> CatalogParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &CatalogConfig) -> CatalogResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }
}

impl<R: Read, T: CsvRecord> CatalogParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R, config: &CatalogConfig) -> CatalogResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            _marker: PhantomData,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> CatalogResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() < expected.len() {
            return Err(CatalogError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Spreadsheet exports often start with a UTF-8 BOM
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(CatalogError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses all records into a Vec, stopping at the first bad record.
    pub fn parse_all(self) -> CatalogResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: CsvRecord> Iterator for CatalogParser<R, T> {
    type Item = CatalogResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing catalog field values.
pub mod parse {
    use super::{CatalogError, CatalogResult, StringRecord};

    /// Returns a field that must not be empty.
    pub fn required(record: &StringRecord, index: usize, column: &str) -> CatalogResult<String> {
        match record.get(index) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(CatalogError::MissingField {
                column: column.to_string(),
            }),
        }
    }

    /// Returns a field that may be empty; empty means null.
    pub fn optional(record: &StringRecord, index: usize) -> Option<String> {
        record
            .get(index)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Parses a boolean from "0" or "1".
    pub fn boolean(value: &str) -> CatalogResult<bool> {
        match value {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(CatalogError::InvalidBoolean {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        key: String,
        value: Option<String>,
    }

    impl CsvRecord for Pair {
        const EXPECTED_COLUMNS: &'static [&'static str] = &["key", "value"];

        fn from_record(record: &StringRecord) -> CatalogResult<Self> {
            Ok(Pair {
                key: parse::required(record, 0, "key")?,
                value: parse::optional(record, 1),
            })
        }
    }

    fn parse_str(data: &str) -> CatalogResult<Vec<Pair>> {
        CatalogParser::<_, Pair>::from_reader(data.as_bytes(), &CatalogConfig::default())?
            .parse_all()
    }

    #[test]
    fn test_parse_records() {
        let pairs = parse_str("key,value\na,1\nb,\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key, "a");
        assert_eq!(pairs[0].value.as_deref(), Some("1"));
        assert_eq!(pairs[1].value, None);
    }

    #[test]
    fn test_header_with_bom() {
        let pairs = parse_str("\u{feff}key,value\na,1\n").unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_unexpected_column() {
        let err = parse_str("name,value\na,1\n").err().unwrap();
        assert!(matches!(
            err,
            CatalogError::UnexpectedColumn { position: 0, .. }
        ));
    }

    #[test]
    fn test_short_header() {
        let err = parse_str("key\na\n").err().unwrap();
        assert!(matches!(
            err,
            CatalogError::InvalidHeader { expected: 2, found: 1 }
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse_str("key,value\n,1\n").err().unwrap();
        assert!(matches!(err, CatalogError::MissingField { .. }));
    }

    #[test]
    fn test_parse_boolean() {
        assert!(!parse::boolean("0").unwrap());
        assert!(parse::boolean("1").unwrap());
        assert!(parse::boolean("true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result =
            CatalogParser::<_, Pair>::from_path("/nonexistent/file.csv", &CatalogConfig::default());
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}

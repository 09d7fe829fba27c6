//! Conditions file parser.
//!
//! Parses `conditions*.csv` catalog files: one reportable condition per row.

use csv::StringRecord;
use tcr_types::ConditionRecord;

use crate::parser::{parse, CsvRecord};
use crate::types::CatalogResult;

/// Expected columns in a conditions file.
const CONDITION_COLUMNS: &[&str] = &["id", "system", "name", "description", "active"];

impl CsvRecord for ConditionRecord {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONDITION_COLUMNS;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(ConditionRecord {
            id: parse::required(record, 0, "id")?,
            system: parse::required(record, 1, "system")?,
            name: parse::required(record, 2, "name")?,
            description: record.get(3).unwrap_or("").to_string(),
            active: parse::boolean(record.get(4).unwrap_or(""))?,
        })
    }
}

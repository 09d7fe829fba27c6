//! Concepts file parser.
//!
//! Parses `concepts*.csv` catalog files: one equivalence record per row.

use csv::StringRecord;
use tcr_types::CatalogRecord;

use crate::parser::{parse, CsvRecord};
use crate::types::CatalogResult;

/// Expected columns in a concepts file.
const CONCEPT_COLUMNS: &[&str] = &[
    "condition_id",
    "service_type",
    "codes",
    "system",
    "icd9_crosswalk",
];

impl CsvRecord for CatalogRecord {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(CatalogRecord {
            condition_id: parse::required(record, 0, "condition_id")?,
            service_type: parse::required(record, 1, "service_type")?,
            codes: parse::required(record, 2, "codes")?,
            system: parse::required(record, 3, "system")?,
            icd9_crosswalk: parse::optional(record, 4),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_concept_record() {
        let record = make_record(&[
            "276197005",
            "dxtc",
            "A36.3|A36",
            "http://hl7.org/fhir/sid/icd-10-cm",
            "0363|0036",
        ]);

        let concept = CatalogRecord::from_record(&record).unwrap();
        assert_eq!(concept.condition_id, "276197005");
        assert_eq!(concept.service_type, "dxtc");
        assert_eq!(concept.codes, "A36.3|A36");
        assert_eq!(concept.icd9_crosswalk.as_deref(), Some("0363|0036"));
    }

    #[test]
    fn test_empty_crosswalk_is_null() {
        let record = make_record(&[
            "276197005",
            "sdtc",
            "772150003",
            "http://snomed.info/sct",
            "",
        ]);

        let concept = CatalogRecord::from_record(&record).unwrap();
        assert_eq!(concept.icd9_crosswalk, None);
    }

    #[test]
    fn test_missing_codes_rejected() {
        let record = make_record(&["276197005", "dxtc", "", "http://loinc.org", ""]);
        assert!(CatalogRecord::from_record(&record).is_err());
    }
}

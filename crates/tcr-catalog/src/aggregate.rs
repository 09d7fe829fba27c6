//! Grouping of catalog rows into a [`ConceptDirectory`].

use std::collections::HashSet;

use tcr_types::{ConceptDirectory, ConceptEntry, ConceptRow};

/// Groups rows by service type, splitting each row's packed codes.
///
/// Row order is preserved within a group and groups appear in the order
/// their service type is first seen. With a filter, only listed service
/// types are kept; filter values matching nothing are ignored.
pub fn aggregate(rows: &[ConceptRow], service_type_filter: Option<&HashSet<String>>) -> ConceptDirectory {
    let mut directory = ConceptDirectory::new();

    for row in rows {
        if let Some(filter) = service_type_filter {
            if !filter.contains(&row.service_type) {
                continue;
            }
        }
        directory.push(
            &row.service_type,
            ConceptEntry::new(row.split_codes(), row.system.as_str()),
        );
    }

    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcr_types::well_known;

    fn clinical_services() -> Vec<ConceptRow> {
        vec![
            ConceptRow::new("dxtc", "A36.3|A36", well_known::ICD10_CM_SYSTEM),
            ConceptRow::new("sdtc", "772150003", well_known::SNOMED_SYSTEM),
        ]
    }

    #[test]
    fn test_aggregate_groups_by_service_type() {
        let directory = aggregate(&clinical_services(), None);
        let json = serde_json::to_value(&directory).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dxtc": [
                    {"codes": ["A36.3", "A36"], "system": "http://hl7.org/fhir/sid/icd-10-cm"}
                ],
                "sdtc": [{"codes": ["772150003"], "system": "http://snomed.info/sct"}],
            })
        );
    }

    #[test]
    fn test_aggregate_filter_services() {
        let filter: HashSet<String> = ["sdtc".to_string()].into_iter().collect();
        let directory = aggregate(&clinical_services(), Some(&filter));

        assert_eq!(directory.service_types().collect::<Vec<_>>(), vec!["sdtc"]);
        assert_eq!(
            directory.get("sdtc").unwrap(),
            &[ConceptEntry::new(["772150003"], well_known::SNOMED_SYSTEM)]
        );
    }

    #[test]
    fn test_aggregate_unmatched_filter_is_empty() {
        let filter: HashSet<String> = ["lotc".to_string()].into_iter().collect();
        assert!(aggregate(&clinical_services(), Some(&filter)).is_empty());
    }

    #[test]
    fn test_aggregate_preserves_row_order_and_duplicates() {
        let rows = vec![
            ConceptRow::new("dxtc", "A36.3|A36", well_known::ICD10_CM_SYSTEM),
            ConceptRow::new("dxtc", "0363|0363", well_known::ICD9_CM_SYSTEM),
        ];
        let directory = aggregate(&rows, None);
        let dxtc = directory.get("dxtc").unwrap();
        assert_eq!(dxtc.len(), 2);
        assert_eq!(dxtc[0].system, well_known::ICD10_CM_SYSTEM);
        assert_eq!(dxtc[1].codes, vec!["0363", "0363"]);
    }
}

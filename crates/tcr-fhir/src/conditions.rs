//! Reportable condition discovery.

use serde_json::Value;
use tcr_types::{well_known, SnomedCode};

/// Returns the reportable condition codes named in a Bundle, without
/// duplicates, in the order first seen.
///
/// Conditions are read from the Reportability Response observations: each
/// `Observation` whose `code` carries [`well_known::CONDITION_CONCEPT_CODE`]
/// contributes the SNOMED codings of its `valueCodeableConcept`. A bundle
/// without entries, or with malformed ones, yields nothing.
pub fn find_conditions(bundle: &Value) -> Vec<SnomedCode> {
    let mut found: Vec<SnomedCode> = Vec::new();

    let observations = bundle
        .get("entry")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.get("resource"))
        .filter(|resource| is_condition_observation(resource));

    for observation in observations {
        let codes = codings(observation.get("valueCodeableConcept"))
            .filter(|coding| {
                coding.get("system").and_then(Value::as_str) == Some(well_known::SNOMED_SYSTEM)
            })
            .filter_map(|coding| coding.get("code").and_then(Value::as_str));

        for code in codes {
            if !found.iter().any(|seen| seen == code) {
                found.push(code.to_string());
            }
        }
    }

    tracing::debug!(conditions = ?found, "found reportable conditions");
    found
}

fn is_condition_observation(resource: &Value) -> bool {
    resource.get("resourceType").and_then(Value::as_str) == Some("Observation")
        && codings(resource.get("code")).any(|coding| {
            coding.get("code").and_then(Value::as_str) == Some(well_known::CONDITION_CONCEPT_CODE)
        })
}

fn codings(concept: Option<&Value>) -> impl Iterator<Item = &Value> {
    concept
        .and_then(|concept| concept.get("coding"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rr_observation(id: &str, codes: &[&str]) -> Value {
        let coding: Vec<Value> = codes
            .iter()
            .map(|code| json!({"code": code, "system": "http://snomed.info/sct"}))
            .collect();
        json!({"resource": {
            "resourceType": "Observation",
            "id": id,
            "code": {"coding": [{
                "code": "64572001",
                "system": "http://snomed.info/sct",
                "display": "Condition"
            }]},
            "valueCodeableConcept": {"coding": coding}
        }})
    }

    #[test]
    fn test_finds_condition_from_rr_observation() {
        let bundle = json!({
            "resourceType": "Bundle",
            "entry": [
                {"resource": {
                    "resourceType": "Observation",
                    "id": "ef84511f-a88a-0a84-2353-d44f641673b0",
                    "code": {"coding": [{"code": "94310-0", "system": "http://loinc.org"}]},
                    "valueCodeableConcept": {"coding": [{
                        "code": "260373001",
                        "system": "http://snomed.info/sct"
                    }]}
                }},
                rr_observation("17f6392f-9340-45d3-a1c8-bc0a30d09f53", &["840539006"]),
                {"resource": {"resourceType": "Patient"}}
            ]
        });
        assert_eq!(find_conditions(&bundle), vec!["840539006"]);
    }

    #[test]
    fn test_deduplicates_in_first_seen_order() {
        let bundle = json!({
            "resourceType": "Bundle",
            "entry": [
                rr_observation("rr-1", &["27836007", "840539006"]),
                rr_observation("rr-2", &["840539006"]),
            ]
        });
        assert_eq!(find_conditions(&bundle), vec!["27836007", "840539006"]);
    }

    #[test]
    fn test_only_snomed_value_codings_count() {
        let bundle = json!({
            "resourceType": "Bundle",
            "entry": [{"resource": {
                "resourceType": "Observation",
                "code": {"coding": [{"code": "64572001"}]},
                "valueCodeableConcept": {"coding": [
                    {"code": "U07.1", "system": "http://hl7.org/fhir/sid/icd-10-cm"},
                    {"code": "840539006"},
                    {"code": "840539006", "system": "http://snomed.info/sct"}
                ]}
            }}]
        });
        assert_eq!(find_conditions(&bundle), vec!["840539006"]);
    }

    #[test]
    fn test_ignores_non_rr_resources() {
        let bundle = json!({
            "resourceType": "Bundle",
            "entry": [
                {"resource": {
                    "resourceType": "Condition",
                    "code": {"coding": [{"code": "64572001"}]},
                    "valueCodeableConcept": {"coding": [{
                        "code": "840539006",
                        "system": "http://snomed.info/sct"
                    }]}
                }},
                {"fullUrl": "urn:uuid:no-resource"}
            ]
        });
        assert!(find_conditions(&bundle).is_empty());
    }

    #[test]
    fn test_bundle_without_entries() {
        assert!(find_conditions(&json!({"resourceType": "Bundle"})).is_empty());
        assert!(find_conditions(&json!({"resourceType": "Bundle", "entry": {}})).is_empty());
        assert!(find_conditions(&json!("not a bundle")).is_empty());
    }
}

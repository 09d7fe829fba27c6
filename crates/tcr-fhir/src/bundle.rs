//! Bundle-wide condition stamping.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde_json::Value;
use tcr_catalog::ConditionNames;
use tcr_types::ConceptDirectory;

use crate::annotate::{check_stampable, write_stamp, Annotator};
use crate::error::{FhirError, FhirResult};
use crate::extract::extract_codes;

/// Stamps every resource in a Bundle that carries a code of the condition.
///
/// A resource matches when any of its extracted codes is the trigger code
/// itself or appears anywhere in `directory`. Matching resources get the
/// same stamp as [`Annotator::stamp_condition`]; the others are left alone.
/// Returns the number of stamped resources.
///
/// Every match is checked, and the display name resolved once if any match
/// is a Condition, before the first write. On error the bundle is unchanged.
///
/// # Errors
/// Fails if the bundle is not an object, its `entry` is not an array, a
/// matching resource cannot be stamped, or the display name cannot be
/// resolved.
pub fn stamp_bundle<N: ConditionNames + ?Sized>(
    bundle: &mut Value,
    snomed_code: &str,
    directory: &ConceptDirectory,
    annotator: &Annotator<'_, N>,
) -> FhirResult<usize> {
    let Some(entries) = entries_mut(bundle)? else {
        return Ok(0);
    };
    let total = entries.len();

    // Per entry: None if untouched, Some(is_condition) if stamped
    #[cfg(feature = "parallel")]
    let plan: Vec<Option<bool>> = entries
        .par_iter()
        .map(|entry| plan_entry(entry, snomed_code, directory))
        .collect::<FhirResult<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let plan: Vec<Option<bool>> = entries
        .iter()
        .map(|entry| plan_entry(entry, snomed_code, directory))
        .collect::<FhirResult<_>>()?;

    let display_name = if plan.contains(&Some(true)) {
        Some(annotator.display_name(snomed_code)?)
    } else {
        None
    };
    let display_name = display_name.as_deref();

    let apply = |(entry, planned): (&mut Value, &Option<bool>)| {
        if let (Some(is_condition), Some(resource)) = (*planned, entry.get_mut("resource")) {
            write_stamp(resource, snomed_code, display_name.filter(|_| is_condition));
        }
    };

    #[cfg(feature = "parallel")]
    entries.par_iter_mut().zip(plan.par_iter()).for_each(apply);

    #[cfg(not(feature = "parallel"))]
    entries.iter_mut().zip(plan.iter()).for_each(apply);

    let stamped = plan.iter().filter(|planned| planned.is_some()).count();
    tracing::info!(snomed_code, stamped, total, "stamped bundle entries");

    Ok(stamped)
}

/// Returns the bundle's entries, or `None` if it has no `entry` element.
fn entries_mut(bundle: &mut Value) -> FhirResult<Option<&mut Vec<Value>>> {
    let obj = bundle
        .as_object_mut()
        .ok_or(FhirError::NotAnObject { what: "bundle" })?;

    match obj.get_mut("entry") {
        None => Ok(None),
        Some(Value::Array(entries)) => Ok(Some(entries)),
        Some(_) => Err(FhirError::MalformedElement {
            element: "entry",
            expected: "an array",
        }),
    }
}

/// Decides whether an entry gets stamped, checking its resource if so.
fn plan_entry(
    entry: &Value,
    snomed_code: &str,
    directory: &ConceptDirectory,
) -> FhirResult<Option<bool>> {
    let Some(resource) = entry.get("resource") else {
        return Ok(None);
    };
    let matched = extract_codes(resource)
        .iter()
        .any(|code| code == snomed_code || directory.contains_code(code));
    if !matched {
        return Ok(None);
    }
    check_stampable(resource).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tcr_catalog::{CatalogError, CatalogResult};
    use tcr_types::{well_known, ConceptEntry};

    struct FixedName;

    impl ConditionNames for FixedName {
        fn display_name(&self, _snomed_code: &str) -> CatalogResult<String> {
            Ok("SARS-CoV-2 (COVID-19)".to_string())
        }
    }

    struct NoNames;

    impl ConditionNames for NoNames {
        fn display_name(&self, snomed_code: &str) -> CatalogResult<String> {
            Err(CatalogError::ConditionNotFound {
                code: snomed_code.to_string(),
            })
        }
    }

    fn covid_directory() -> ConceptDirectory {
        let mut directory = ConceptDirectory::new();
        directory.push("lrtc", ConceptEntry::new(["94310-0"], well_known::LOINC_SYSTEM));
        directory.push("dxtc", ConceptEntry::new(["U07.1"], well_known::ICD10_CM_SYSTEM));
        directory
    }

    fn sample_bundle() -> Value {
        json!({
            "resourceType": "Bundle",
            "type": "batch",
            "entry": [
                {"resource": {
                    "resourceType": "Observation",
                    "id": "ef84511f-a88a-0a84-2353-d44f641673b0",
                    "code": {"coding": [{"code": "94310-0", "system": "http://loinc.org"}]},
                    "valueCodeableConcept": {"coding": [{"code": "260373001"}]}
                }},
                {"resource": {
                    "resourceType": "Condition",
                    "id": "d42c4a1f-f700-61bf-62a0-c034257d6a79",
                    "code": {"coding": [{"code": "840539006", "system": "http://snomed.info/sct"}]}
                }},
                {"resource": {
                    "resourceType": "DiagnosticReport",
                    "id": "e6aa3537-cb1d-9e2e-9060-08828602339a",
                    "code": {"coding": [{"code": "94310-0"}]}
                }},
                {"resource": {
                    "resourceType": "Immunization",
                    "id": "427d703c-b43c-53c7-e966-97ee5f217d03",
                    "vaccineCode": {"coding": [{"code": "207"}]}
                }},
                {"resource": {
                    "resourceType": "Patient",
                    "id": "edf8412c-6398-433f-8ca7-18f3214cf815"
                }},
                {"fullUrl": "urn:uuid:no-resource"}
            ]
        })
    }

    fn stamped_ids(bundle: &Value) -> Vec<&str> {
        bundle["entry"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| &entry["resource"])
            .filter(|resource| resource.get("extension").is_some())
            .filter_map(|resource| resource["id"].as_str())
            .collect()
    }

    #[test]
    fn test_stamps_only_matching_resources() {
        let mut bundle = sample_bundle();
        let annotator = Annotator::new(&FixedName);

        let count = stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            stamped_ids(&bundle),
            vec![
                "ef84511f-a88a-0a84-2353-d44f641673b0",
                "d42c4a1f-f700-61bf-62a0-c034257d6a79",
                "e6aa3537-cb1d-9e2e-9060-08828602339a",
            ]
        );
        assert_eq!(
            bundle["entry"][1]["resource"]["valueCodeableConcept"]["text"],
            "SARS-CoV-2 (COVID-19)"
        );
        assert_eq!(
            bundle["entry"][0]["resource"]["extension"][0]["valueCoding"]["code"],
            "840539006"
        );
    }

    #[test]
    fn test_bundle_without_entries() {
        let mut bundle = json!({"resourceType": "Bundle"});
        let annotator = Annotator::new(&FixedName);
        let count = stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_empty_directory_matches_trigger_code_only() {
        let mut bundle = sample_bundle();
        let annotator = Annotator::new(&FixedName);
        let count =
            stamp_bundle(&mut bundle, "840539006", &ConceptDirectory::new(), &annotator).unwrap();
        assert_eq!(count, 1);
        assert_eq!(stamped_ids(&bundle), vec!["d42c4a1f-f700-61bf-62a0-c034257d6a79"]);
    }

    #[test]
    fn test_name_failure_leaves_bundle_unchanged() {
        // The matching Observation comes before the Condition
        let mut bundle = sample_bundle();
        let before = bundle.clone();
        let annotator = Annotator::new(&NoNames);

        let err = stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator).unwrap_err();

        assert!(matches!(
            err,
            FhirError::Catalog(CatalogError::ConditionNotFound { .. })
        ));
        assert_eq!(bundle, before);
    }

    #[test]
    fn test_names_not_resolved_without_conditions() {
        let mut bundle = json!({
            "resourceType": "Bundle",
            "entry": [{"resource": {
                "resourceType": "Observation",
                "code": {"coding": [{"code": "94310-0"}]}
            }}]
        });
        let annotator = Annotator::new(&NoNames);
        let count = stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_malformed_match_leaves_bundle_unchanged() {
        let mut bundle = json!({
            "resourceType": "Bundle",
            "entry": [
                {"resource": {
                    "resourceType": "Observation",
                    "code": {"coding": [{"code": "94310-0"}]}
                }},
                {"resource": {
                    "resourceType": "DiagnosticReport",
                    "code": {"coding": [{"code": "94310-0"}]},
                    "extension": "oops"
                }}
            ]
        });
        let before = bundle.clone();
        let annotator = Annotator::new(&FixedName);

        let err = stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator).unwrap_err();

        assert!(matches!(err, FhirError::MalformedElement { element: "extension", .. }));
        assert_eq!(bundle, before);
    }

    #[test]
    fn test_malformed_bundle() {
        let annotator = Annotator::new(&FixedName);
        let mut bundle = json!({"resourceType": "Bundle", "entry": {}});
        assert!(matches!(
            stamp_bundle(&mut bundle, "840539006", &covid_directory(), &annotator),
            Err(FhirError::MalformedElement { element: "entry", .. })
        ));
    }
}

//! Per-resource-type code extraction.

use serde_json::Value;

/// CodeableConcept elements inspected for each supported `resourceType`,
/// in output order.
const EXTRACTION_PLAN: &[(&str, &[&str])] = &[
    ("Observation", &["code", "valueCodeableConcept"]),
    ("DiagnosticReport", &["code"]),
    ("Immunization", &["vaccineCode"]),
    ("Condition", &["code"]),
];

/// Returns the elements inspected for a resource type; empty if the type
/// is not supported.
pub fn inspected_elements(resource_type: &str) -> &'static [&'static str] {
    EXTRACTION_PLAN
        .iter()
        .find(|(name, _)| *name == resource_type)
        .map(|(_, elements)| *elements)
        .unwrap_or(&[])
}

/// Returns every `coding[].code` found on the resource's inspected
/// elements, element by element, in array order.
///
/// Missing elements, missing `coding` arrays and codings without a string
/// `code` contribute nothing.
pub fn extract_codes(resource: &Value) -> Vec<String> {
    let resource_type = resource
        .get("resourceType")
        .and_then(Value::as_str)
        .unwrap_or_default();

    inspected_elements(resource_type)
        .iter()
        .filter_map(|element| resource.get(*element))
        .filter_map(|concept| concept.get("coding").and_then(Value::as_array))
        .flatten()
        .filter_map(|coding| coding.get("code").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

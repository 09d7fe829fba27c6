//! Condition-code stamping.

use serde_json::{Map, Value};
use tcr_catalog::ConditionNames;
use tcr_types::CodeExtension;

use crate::error::{FhirError, FhirResult};

/// Stamps FHIR resources with condition-code extensions.
///
/// Condition resources also get the condition's display name, looked up
/// through `names`.
pub struct Annotator<'a, N: ConditionNames + ?Sized> {
    names: &'a N,
}

impl<'a, N: ConditionNames + ?Sized> Annotator<'a, N> {
    /// Creates an annotator resolving names through `names`.
    pub fn new(names: &'a N) -> Self {
        Self { names }
    }

    /// Appends a condition-code extension for `snomed_code` to the resource
    /// and returns the same resource.
    ///
    /// For `Condition` resources `valueCodeableConcept.text` is set to the
    /// condition's display name; other resource types keep their
    /// `valueCodeableConcept` untouched. Stamps are never deduplicated.
    ///
    /// The name is resolved before anything is written, so a failed lookup
    /// leaves the resource unchanged.
    ///
    /// # Errors
    /// - [`FhirError::NotAnObject`] if `resource` is not a JSON object.
    /// - [`FhirError::MalformedElement`] if `extension` is not an array, or a
    ///   Condition's `valueCodeableConcept` is not an object.
    /// - [`FhirError::Catalog`] if the display name cannot be resolved.
    pub fn stamp_condition<'r>(
        &self,
        resource: &'r mut Value,
        snomed_code: &str,
    ) -> FhirResult<&'r mut Value> {
        let display_name = if check_stampable(resource)? {
            Some(self.display_name(snomed_code)?)
        } else {
            None
        };
        write_stamp(resource, snomed_code, display_name.as_deref());
        Ok(resource)
    }

    /// Resolves the display name written into stamped Condition resources.
    pub(crate) fn display_name(&self, snomed_code: &str) -> FhirResult<String> {
        Ok(self.names.display_name(snomed_code)?)
    }
}

/// Checks that `resource` can be stamped without writing anything.
///
/// Returns true if the resource is a `Condition`, which also needs a
/// display name.
pub(crate) fn check_stampable(resource: &Value) -> FhirResult<bool> {
    let obj = resource
        .as_object()
        .ok_or(FhirError::NotAnObject { what: "resource" })?;

    let is_condition = obj.get("resourceType").and_then(Value::as_str) == Some("Condition");
    if is_condition {
        check_kind(obj, "valueCodeableConcept", Value::is_object, "an object")?;
    }
    check_kind(obj, "extension", Value::is_array, "an array")?;

    Ok(is_condition)
}

/// Writes the stamp onto a resource that passed [`check_stampable`].
///
/// `display_name` is only written when present.
pub(crate) fn write_stamp(resource: &mut Value, snomed_code: &str, display_name: Option<&str>) {
    let Some(obj) = resource.as_object_mut() else {
        return;
    };

    if let Value::Array(extensions) = obj
        .entry("extension")
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        extensions.push(CodeExtension::condition(snomed_code).to_json());
    }

    if let Some(name) = display_name {
        if let Value::Object(concept) = obj
            .entry("valueCodeableConcept")
            .or_insert_with(|| Value::Object(Map::new()))
        {
            concept.insert("text".to_string(), Value::String(name.to_string()));
        }
    }

    let id = obj.get("id").and_then(Value::as_str).unwrap_or_default();
    tracing::debug!(
        snomed_code,
        id,
        named = display_name.is_some(),
        "stamped condition code"
    );
}

/// Fails if `element` is present with the wrong JSON kind.
fn check_kind(
    obj: &Map<String, Value>,
    element: &'static str,
    is_kind: fn(&Value) -> bool,
    expected: &'static str,
) -> FhirResult<()> {
    match obj.get(element) {
        Some(value) if !is_kind(value) => Err(FhirError::MalformedElement { element, expected }),
        _ => Ok(()),
    }
}

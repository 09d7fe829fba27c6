//! Well-known coding system URIs and extension URLs.
//!
//! # Examples
//!
//! ```
//! use tcr_types::well_known;
//!
//! assert_eq!(well_known::SNOMED_SYSTEM, "http://snomed.info/sct");
//! assert_eq!(well_known::ICD9_CM_SYSTEM, "http://hl7.org/fhir/sid/icd-9-cm");
//! ```

// =============================================================================
// Coding Systems
// =============================================================================

/// SNOMED CT - `http://snomed.info/sct`.
///
/// The system of every trigger code and of the stamped condition-code extension.
pub const SNOMED_SYSTEM: &str = "http://snomed.info/sct";

/// LOINC - `http://loinc.org`.
pub const LOINC_SYSTEM: &str = "http://loinc.org";

/// ICD-10-CM - `http://hl7.org/fhir/sid/icd-10-cm`.
pub const ICD10_CM_SYSTEM: &str = "http://hl7.org/fhir/sid/icd-10-cm";

/// ICD-9-CM - `http://hl7.org/fhir/sid/icd-9-cm`.
///
/// Assigned to the rows synthesized from a diagnosis row's ICD-9 crosswalk.
pub const ICD9_CM_SYSTEM: &str = "http://hl7.org/fhir/sid/icd-9-cm";


// =============================================================================
// Concepts
// =============================================================================

/// SNOMED CT `64572001` - Condition (disorder).
///
/// Code of the Reportability Response observations whose
/// `valueCodeableConcept` names a reportable condition.
pub const CONDITION_CONCEPT_CODE: &str = "64572001";

// =============================================================================
// Extensions
// =============================================================================

/// Condition-code extension URL.
///
/// Downstream consumers match on this exact string.
pub const CONDITION_CODE_EXTENSION_URL: &str =
    "https://reportstream.cdc.gov/fhir/StructureDefinition/condition-code";

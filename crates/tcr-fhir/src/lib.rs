//! # tcr-fhir
//!
//! Inspection and annotation of FHIR JSON resources.
//!
//! - [`extract_codes`] lists the codes a resource carries, following a
//!   fixed per-`resourceType` table of CodeableConcept elements.
//! - [`Annotator`] stamps a resource with the condition-code extension and,
//!   for Condition resources, the condition's display name.
//! - [`stamp_bundle`] applies both to every entry of a Bundle whose codes
//!   appear in a condition's concept directory.
//! - [`find_conditions`] lists the reportable conditions a Bundle's
//!   Reportability Response observations name.

#![warn(missing_docs)]

mod annotate;
mod bundle;
mod conditions;
mod error;
mod extract;

pub use annotate::Annotator;
pub use bundle::stamp_bundle;
pub use conditions::find_conditions;
pub use error::{FhirError, FhirResult};
pub use extract::{extract_codes, inspected_elements};

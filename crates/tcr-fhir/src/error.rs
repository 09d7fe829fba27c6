//! FHIR annotation errors.

use tcr_catalog::CatalogError;
use thiserror::Error;

/// Errors raised while annotating FHIR resources.
#[derive(Error, Debug)]
pub enum FhirError {
    /// The resource (or bundle) is not a JSON object.
    #[error("expected a JSON object for {what}")]
    NotAnObject {
        /// What was being read.
        what: &'static str,
    },

    /// An element that must be written has an incompatible shape.
    #[error("element '{element}' is present but is not {expected}")]
    MalformedElement {
        /// Element name.
        element: &'static str,
        /// Expected JSON kind.
        expected: &'static str,
    },

    /// Condition name resolution failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result type for FHIR operations.
pub type FhirResult<T> = Result<T, FhirError>;

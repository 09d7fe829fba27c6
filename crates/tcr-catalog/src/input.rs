//! Raw identifier input normalization.

use tcr_types::SnomedCode;

use crate::types::{CatalogError, CatalogResult};

/// Splits a comma-separated identifier string.
///
/// Segments are returned as-is; empty segments are kept.
pub fn split_identifiers(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Normalizes a raw SNOMED input into a single-code list ready for
/// [`ConceptCatalog::lookup`](crate::ConceptCatalog::lookup).
///
/// # Errors
/// Returns [`CatalogError::UnsupportedMultiCode`] if the input names more
/// than one code.
pub fn normalize_single_snomed(raw: &str) -> CatalogResult<Vec<SnomedCode>> {
    let codes = split_identifiers(raw);
    if codes.len() > 1 {
        return Err(CatalogError::UnsupportedMultiCode { count: codes.len() });
    }
    Ok(codes)
}

//! SNOMED trigger code lookup with cross-system expansion.

use tcr_types::{well_known, CatalogRecord, ConceptRow};

use crate::source::CatalogSource;
use crate::types::{CatalogError, CatalogResult};

/// Looks up the concept equivalences of a SNOMED trigger code.
pub struct ConceptCatalog<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> ConceptCatalog<'a> {
    /// Creates a catalog reading from `source`.
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    /// Returns every equivalence row for a single SNOMED code.
    ///
    /// Diagnosis rows carrying an ICD-9 crosswalk are followed by a
    /// synthesized ICD-9-CM row. An unknown code yields an empty list.
    ///
    /// # Errors
    /// - [`CatalogError::EmptyLookup`] / [`CatalogError::UnsupportedMultiCode`]
    ///   unless exactly one code is given.
    /// - [`CatalogError::Access`] if the store fails; nothing is retried.
    pub fn lookup<S: AsRef<str>>(&self, snomed_codes: &[S]) -> CatalogResult<Vec<ConceptRow>> {
        let snomed_code = match snomed_codes {
            [code] => code.as_ref(),
            [] => return Err(CatalogError::EmptyLookup),
            codes => return Err(CatalogError::UnsupportedMultiCode { count: codes.len() }),
        };

        let records = {
            let connection = self.source.connect().map_err(CatalogError::access)?;
            connection
                .concept_records(snomed_code)
                .map_err(CatalogError::access)?
        };

        tracing::debug!(
            snomed_code,
            records = records.len(),
            "looked up concept records"
        );

        Ok(expand_records(&records))
    }
}

/// Converts raw records into caller-facing rows, inserting the ICD-9-CM
/// crosswalk row directly after each diagnosis row that has one.
pub fn expand_records(records: &[CatalogRecord]) -> Vec<ConceptRow> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let row = record.to_row();
        let crosswalk = match (&record.icd9_crosswalk, row.service_type().is_diagnosis()) {
            (Some(codes), true) if record.has_crosswalk() => Some(ConceptRow::new(
                &record.service_type,
                codes,
                well_known::ICD9_CM_SYSTEM,
            )),
            _ => None,
        };
        rows.push(row);
        rows.extend(crosswalk);
    }
    rows
}

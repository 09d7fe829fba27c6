//! Trigger code reference service.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use tcr_catalog::{
    aggregate, discover_catalog_files, normalize_single_snomed, split_identifiers, CatalogError,
    CatalogSource, ConceptCatalog, ConditionNameResolver, ReferenceStore,
};
use tcr_fhir::{find_conditions, stamp_bundle, Annotator, FhirError};
use tcr_types::{ConceptDirectory, ConceptRow, SnomedCode};
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::response::LookupResponse;

/// Errors raised by service operations that do not report failures as
/// [`LookupResponse::Error`].
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Catalog loading or lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Bundle stamping failed.
    #[error(transparent)]
    Fhir(#[from] FhirError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Trigger code reference service.
///
/// Cheap to clone; clones share the same catalog source.
pub struct TriggerCodeService<S: CatalogSource = ReferenceStore> {
    source: Arc<S>,
}

impl<S: CatalogSource> Clone for TriggerCodeService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl TriggerCodeService<ReferenceStore> {
    /// Loads the reference store from the configured catalog directory.
    pub fn load(config: &ServiceConfig) -> ServiceResult<Self> {
        tracing::info!("Loading catalog from: {}", config.data_path.display());

        let files = discover_catalog_files(&config.data_path)?;
        let mut store = ReferenceStore::new();
        store.load_all(&files, config.catalog_config())?;

        tracing::info!(
            "Loaded {} conditions and {} concept records",
            store.condition_count(),
            store.concept_row_count()
        );

        Ok(Self::new(store))
    }
}

impl<S: CatalogSource> TriggerCodeService<S> {
    /// Creates a new service over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Returns a reference to the catalog source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks up the concept directory of a raw single SNOMED input,
    /// optionally limited to a comma-separated list of service types.
    pub fn concept_directory(
        &self,
        raw_snomed: &str,
        filter_raw: Option<&str>,
    ) -> Result<ConceptDirectory, CatalogError> {
        let rows = self.concept_rows(raw_snomed)?;
        let filter: Option<HashSet<String>> =
            filter_raw.map(|raw| split_identifiers(raw).into_iter().collect());
        Ok(aggregate(&rows, filter.as_ref()))
    }

    /// Looks up the raw catalog rows of a raw single SNOMED input.
    pub fn concept_rows(&self, raw_snomed: &str) -> Result<Vec<ConceptRow>, CatalogError> {
        let codes = normalize_single_snomed(raw_snomed)?;
        ConceptCatalog::new(&*self.source).lookup(&codes)
    }

    /// Returns the concept directory, or `{"error": message}` on failure.
    pub fn get_value_sets(&self, raw_snomed: &str, filter_raw: Option<&str>) -> LookupResponse {
        match self.concept_directory(raw_snomed, filter_raw) {
            Ok(directory) => LookupResponse::Concepts(directory),
            Err(e) => {
                tracing::warn!(raw_snomed, error = %e, "value set lookup failed");
                LookupResponse::error(e)
            }
        }
    }

    /// Returns the raw catalog rows, or `{"error": message}` on failure.
    pub fn get_concept_rows(&self, raw_snomed: &str) -> LookupResponse {
        match self.concept_rows(raw_snomed) {
            Ok(rows) => LookupResponse::Rows(rows),
            Err(e) => {
                tracing::warn!(raw_snomed, error = %e, "concept row lookup failed");
                LookupResponse::error(e)
            }
        }
    }

    /// Stamps every resource in `bundle` that carries one of the
    /// condition's codes. Returns the number of stamped resources.
    pub fn stamp_condition_extensions(
        &self,
        bundle: &mut Value,
        raw_snomed: &str,
    ) -> ServiceResult<usize> {
        // Rejects multi-code input before anything is stamped
        let directory = self.concept_directory(raw_snomed, None)?;

        let names = ConditionNameResolver::new(&*self.source);
        let annotator = Annotator::new(&names);

        Ok(stamp_bundle(bundle, raw_snomed, &directory, &annotator)?)
    }

    /// Finds the reportable conditions named in `bundle` and stamps the
    /// resources matching each of them.
    ///
    /// Returns each condition code with its number of stamped resources, in
    /// the order the conditions were found. The stamped bundle only replaces
    /// `bundle` once every condition succeeded, so on error it is unchanged.
    pub fn stamp_reportable_conditions(
        &self,
        bundle: &mut Value,
    ) -> ServiceResult<Vec<(SnomedCode, usize)>> {
        let conditions = find_conditions(bundle);
        if conditions.is_empty() {
            tracing::info!("No reportable conditions found in bundle");
            return Ok(Vec::new());
        }

        let directories = conditions
            .into_iter()
            .map(|code| -> ServiceResult<_> {
                let directory = self.concept_directory(&code, None)?;
                Ok((code, directory))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        let names = ConditionNameResolver::new(&*self.source);
        let annotator = Annotator::new(&names);

        let mut stamped_bundle = bundle.clone();
        let mut stamped = Vec::with_capacity(directories.len());
        for (code, directory) in directories {
            let count = stamp_bundle(&mut stamped_bundle, &code, &directory, &annotator)?;
            stamped.push((code, count));
        }
        *bundle = stamped_bundle;

        Ok(stamped)
    }
}

//! Condition display name resolution.

use crate::source::CatalogSource;
use crate::types::{CatalogError, CatalogResult};

/// Anything that can name a condition from its SNOMED trigger code.
pub trait ConditionNames: Sync {
    /// Returns the display name for `snomed_code`.
    fn display_name(&self, snomed_code: &str) -> CatalogResult<String>;
}

/// Resolves condition display names from the reference store.
pub struct ConditionNameResolver<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> ConditionNameResolver<'a> {
    /// Creates a resolver reading from `source`.
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    /// Looks up the display name of a condition.
    ///
    /// # Errors
    /// - [`CatalogError::ConditionNotFound`] if the store has no such condition.
    /// - [`CatalogError::Access`] if the store fails.
    pub fn resolve_display_name(&self, snomed_code: &str) -> CatalogResult<String> {
        let name = {
            let connection = self.source.connect().map_err(CatalogError::access)?;
            connection
                .condition_name(snomed_code)
                .map_err(CatalogError::access)?
        };

        name.ok_or_else(|| CatalogError::ConditionNotFound {
            code: snomed_code.to_string(),
        })
    }
}

impl ConditionNames for ConditionNameResolver<'_> {
    fn display_name(&self, snomed_code: &str) -> CatalogResult<String> {
        self.resolve_display_name(snomed_code)
    }
}

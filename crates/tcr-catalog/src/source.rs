//! Reference store access traits.
//!
//! Lookups never hold a store handle across calls: each one calls
//! [`CatalogSource::connect`], runs its query on the returned connection and
//! drops it before returning.

use tcr_types::CatalogRecord;

use crate::types::CatalogResult;

/// A reference store that can hand out short-lived connections.
pub trait CatalogSource: Send + Sync {
    /// Opens a connection for a single lookup.
    fn connect(&self) -> CatalogResult<Box<dyn CatalogConnection + '_>>;
}

/// A connection to a reference store, released on drop.
pub trait CatalogConnection {
    /// Returns every equivalence record for a SNOMED trigger code, in store
    /// order. An unknown code yields an empty list.
    fn concept_records(&self, snomed_code: &str) -> CatalogResult<Vec<CatalogRecord>>;

    /// Returns the display name of a condition, or `None` if the store has
    /// no such condition.
    fn condition_name(&self, snomed_code: &str) -> CatalogResult<Option<String>>;
}

//! # tcr-catalog
//!
//! Reference catalog of clinically equivalent codes keyed by SNOMED CT
//! trigger codes.
//!
//! The catalog is read through the [`CatalogSource`] trait, which hands out a
//! short-lived [`CatalogConnection`] per lookup. [`ReferenceStore`] is the
//! bundled in-memory source, loaded from the `conditions` and `concepts` CSV
//! files of a catalog directory.
//!
//! ```ignore
//! let files = discover_catalog_files("./data")?;
//! let mut store = ReferenceStore::new();
//! store.load_all(&files, CatalogConfig::default())?;
//!
//! let codes = normalize_single_snomed("276197005")?;
//! let rows = ConceptCatalog::new(&store).lookup(&codes)?;
//! let directory = aggregate(&rows, None);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod catalog;
mod concept;
mod condition;
mod input;
mod loader;
mod names;
mod parser;
mod source;
mod store;
mod types;

pub use aggregate::aggregate;
pub use catalog::{expand_records, ConceptCatalog};
pub use input::{normalize_single_snomed, split_identifiers};
pub use loader::discover_catalog_files;
pub use names::{ConditionNameResolver, ConditionNames};
pub use parser::{CatalogParser, CsvRecord};
pub use source::{CatalogConnection, CatalogSource};
pub use store::ReferenceStore;
pub use types::{CatalogConfig, CatalogError, CatalogFiles, CatalogResult};

// Re-export tcr-types for convenience
pub use tcr_types;

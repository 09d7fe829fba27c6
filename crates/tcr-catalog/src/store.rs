//! In-memory reference store.
//!
//! Holds the conditions and concept equivalence records of a catalog
//! directory and serves them through [`CatalogSource`].
//!
//! ```ignore
//! let files = discover_catalog_files("./data")?;
//! let mut store = ReferenceStore::new();
//! store.load_all(&files, CatalogConfig::default())?;
//!
//! let connection = store.connect()?;
//! let records = connection.concept_records("840539006")?;
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tcr_types::{CatalogRecord, ConditionRecord};

use crate::parser::CatalogParser;
use crate::source::{CatalogConnection, CatalogSource};
use crate::types::{CatalogConfig, CatalogFiles, CatalogResult};

/// In-memory store for catalog data.
#[derive(Default)]
pub struct ReferenceStore {
    /// Conditions indexed by SNOMED trigger code.
    conditions: HashMap<String, ConditionRecord>,
    /// Concept records indexed by condition ID, in file order.
    concepts_by_condition: HashMap<String, Vec<CatalogRecord>>,
    /// Conditions dropped as inactive; their concept records are dropped too.
    retired: HashSet<String>,
}

impl std::fmt::Debug for ReferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceStore")
            .field("conditions", &self.conditions.len())
            .field("concepts_by_condition", &self.concepts_by_condition.len())
            .field("retired", &self.retired.len())
            .finish()
    }
}

impl ReferenceStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads both catalog files.
    ///
    /// Conditions are loaded first so inactive ones can filter the concepts.
    pub fn load_all(&mut self, files: &CatalogFiles, config: CatalogConfig) -> CatalogResult<()> {
        if let Some(path) = &files.conditions_file {
            let count = self.load_conditions(path, &config)?;
            tracing::info!("Loaded {} conditions from {}", count, path.display());
        }
        if let Some(path) = &files.concepts_file {
            let count = self.load_concepts(path, &config)?;
            tracing::info!("Loaded {} concept records from {}", count, path.display());
        }
        Ok(())
    }

    /// Loads conditions from a CSV file. Returns the number kept.
    pub fn load_conditions<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &CatalogConfig,
    ) -> CatalogResult<usize> {
        let parser = CatalogParser::<_, ConditionRecord>::from_path(path, config)?;
        let mut count = 0;

        for condition in parser {
            let condition = condition?;
            if config.active_only && !condition.active {
                self.retired.insert(condition.id);
                continue;
            }
            self.conditions.insert(condition.id.clone(), condition);
            count += 1;
        }

        Ok(count)
    }

    /// Loads concept records from a CSV file. Returns the number kept.
    pub fn load_concepts<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &CatalogConfig,
    ) -> CatalogResult<usize> {
        let parser = CatalogParser::<_, CatalogRecord>::from_path(path, config)?;
        let mut count = 0;

        for record in parser {
            let record = record?;
            if self.retired.contains(&record.condition_id) {
                continue;
            }
            self.concepts_by_condition
                .entry(record.condition_id.clone())
                .or_default()
                .push(record);
            count += 1;
        }

        Ok(count)
    }

    /// Inserts conditions directly (useful for testing).
    pub fn insert_conditions(&mut self, conditions: impl IntoIterator<Item = ConditionRecord>) {
        for condition in conditions {
            self.conditions.insert(condition.id.clone(), condition);
        }
    }

    /// Inserts concept records directly (useful for testing).
    pub fn insert_concepts(&mut self, records: impl IntoIterator<Item = CatalogRecord>) {
        for record in records {
            self.concepts_by_condition
                .entry(record.condition_id.clone())
                .or_default()
                .push(record);
        }
    }

    /// Gets a condition by its SNOMED trigger code.
    pub fn get_condition(&self, snomed_code: &str) -> Option<&ConditionRecord> {
        self.conditions.get(snomed_code)
    }

    /// Returns the concept records of a condition.
    pub fn get_concepts(&self, snomed_code: &str) -> &[CatalogRecord] {
        self.concepts_by_condition
            .get(snomed_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of conditions in the store.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Returns the total number of concept records in the store.
    pub fn concept_row_count(&self) -> usize {
        self.concepts_by_condition.values().map(Vec::len).sum()
    }
}

impl CatalogSource for ReferenceStore {
    fn connect(&self) -> CatalogResult<Box<dyn CatalogConnection + '_>> {
        tracing::trace!("opening reference store connection");
        Ok(Box::new(StoreConnection { store: self }))
    }
}

/// Read-only view of a [`ReferenceStore`] for one lookup.
struct StoreConnection<'a> {
    store: &'a ReferenceStore,
}

impl CatalogConnection for StoreConnection<'_> {
    fn concept_records(&self, snomed_code: &str) -> CatalogResult<Vec<CatalogRecord>> {
        Ok(self.store.get_concepts(snomed_code).to_vec())
    }

    fn condition_name(&self, snomed_code: &str) -> CatalogResult<Option<String>> {
        Ok(self
            .store
            .get_condition(snomed_code)
            .map(|condition| condition.name.clone()))
    }
}

impl Drop for StoreConnection<'_> {
    fn drop(&mut self) {
        tracing::trace!("released reference store connection");
    }
}

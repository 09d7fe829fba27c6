//! Catalog concept rows.
//!
//! This module provides [`CatalogRecord`], a raw row as held by the
//! reference store, and [`ConceptRow`], the `(service_type, codes, system)`
//! tuple handed to callers.

use crate::ServiceType;

/// Separator between alternative codes packed into one `codes` field.
pub const CODE_SEPARATOR: char = '|';

/// A raw concept equivalence record from the reference store.
///
/// # Examples
///
/// ```
/// use tcr_types::{CatalogRecord, well_known};
///
/// let record = CatalogRecord {
///     condition_id: "276197005".to_string(),
///     service_type: "dxtc".to_string(),
///     codes: "A36.3|A36".to_string(),
///     system: well_known::ICD10_CM_SYSTEM.to_string(),
///     icd9_crosswalk: Some("0363|0036".to_string()),
/// };
///
/// assert!(record.has_crosswalk());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogRecord {
    /// SNOMED trigger code this record belongs to.
    pub condition_id: String,
    /// Service type tag (e.g. `dxtc`).
    pub service_type: String,
    /// One or more codes, `|`-separated.
    pub codes: String,
    /// Coding system URI of `codes`.
    pub system: String,
    /// ICD-9-CM codes equivalent to `codes`, `|`-separated, if any.
    pub icd9_crosswalk: Option<String>,
}

impl CatalogRecord {
    /// Returns true if the record carries a non-empty ICD-9 crosswalk value.
    pub fn has_crosswalk(&self) -> bool {
        self.icd9_crosswalk
            .as_deref()
            .is_some_and(|crosswalk| !crosswalk.is_empty())
    }

    /// Returns the caller-facing row for this record, dropping the crosswalk.
    pub fn to_row(&self) -> ConceptRow {
        ConceptRow::new(&self.service_type, &self.codes, &self.system)
    }
}

/// One equivalence record returned by a catalog lookup.
///
/// Serializes as a `[service_type, codes, system]` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConceptRow {
    /// Service type tag.
    pub service_type: String,
    /// One or more codes, `|`-separated. All are retained as equivalents.
    pub codes: String,
    /// Coding system URI.
    pub system: String,
}

impl ConceptRow {
    /// Creates a new row.
    pub fn new(
        service_type: impl Into<String>,
        codes: impl Into<String>,
        system: impl Into<String>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            codes: codes.into(),
            system: system.into(),
        }
    }

    /// Returns the service type of this row.
    pub fn service_type(&self) -> ServiceType {
        ServiceType::from_tag(&self.service_type)
    }

    /// Splits the packed `codes` field into individual codes, in order.
    ///
    /// Duplicates are kept.
    pub fn split_codes(&self) -> Vec<&str> {
        self.codes.split(CODE_SEPARATOR).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConceptRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;

        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.service_type)?;
        tuple.serialize_element(&self.codes)?;
        tuple.serialize_element(&self.system)?;
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConceptRow {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (service_type, codes, system) = <(String, String, String)>::deserialize(deserializer)?;
        Ok(Self {
            service_type,
            codes,
            system,
        })
    }
}

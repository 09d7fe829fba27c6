//! Reportable condition records.

/// A reportable condition from the reference store.
///
/// Keyed by its SNOMED trigger code; `name` is the human-readable display
/// name stamped onto Condition resources.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionRecord {
    /// SNOMED trigger code.
    pub id: String,
    /// Coding system of `id`, normally SNOMED CT.
    pub system: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether this condition is active in the catalog.
    pub active: bool,
}

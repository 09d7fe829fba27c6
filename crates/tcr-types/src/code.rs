//! SNOMED CT trigger code type.
//!
//! Trigger codes are carried as strings rather than numeric SCTIDs: lookups
//! are exact string matches against the catalog and callers may pass
//! identifiers that are not valid SCTIDs at all (such lookups simply find
//! nothing).

/// A SNOMED CT condition trigger code.
///
/// # Examples
///
/// ```
/// use tcr_types::SnomedCode;
///
/// let covid: SnomedCode = "840539006".to_string();
/// assert_eq!(covid.len(), 9);
/// ```
pub type SnomedCode = String;

//! Aggregated concept directory.
//!
//! A [`ConceptDirectory`] maps service type tags to the ordered list of
//! code sets that apply to that part of a case document. Group order is the
//! order in which each service type first appeared in the catalog rows.

/// A set of equivalent codes within one coding system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptEntry {
    /// Individual codes, in catalog order.
    pub codes: Vec<String>,
    /// Coding system URI.
    pub system: String,
}

impl ConceptEntry {
    /// Creates a new entry.
    pub fn new<I, S>(codes: I, system: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            system: system.into(),
        }
    }
}

/// Concept entries grouped by service type.
///
/// Serializes as a JSON object keyed by service type tag, for example:
///
/// ```json
/// {"dxtc": [{"codes": ["A36.3", "A36"], "system": "http://hl7.org/fhir/sid/icd-10-cm"}]}
/// ```
///
/// # Examples
///
/// ```
/// use tcr_types::{ConceptDirectory, ConceptEntry};
///
/// let mut directory = ConceptDirectory::new();
/// directory.push("sdtc", ConceptEntry::new(["772150003"], "http://snomed.info/sct"));
/// directory.push("dxtc", ConceptEntry::new(["A36"], "http://hl7.org/fhir/sid/icd-10-cm"));
///
/// let tags: Vec<&str> = directory.service_types().collect();
/// assert_eq!(tags, vec!["sdtc", "dxtc"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptDirectory {
    groups: Vec<(String, Vec<ConceptEntry>)>,
}

impl ConceptDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to the group for `service_type`, creating the group
    /// at the end if it does not exist yet.
    pub fn push(&mut self, service_type: &str, entry: ConceptEntry) {
        match self.groups.iter_mut().find(|(tag, _)| tag == service_type) {
            Some((_, entries)) => entries.push(entry),
            None => self.groups.push((service_type.to_string(), vec![entry])),
        }
    }

    /// Returns the entries for a service type.
    pub fn get(&self, service_type: &str) -> Option<&[ConceptEntry]> {
        self.groups
            .iter()
            .find(|(tag, _)| tag == service_type)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Returns the service type tags in group order.
    pub fn service_types(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(tag, _)| tag.as_str())
    }

    /// Returns true if any entry in any group lists `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        self.all_codes().any(|candidate| candidate == code)
    }

    /// Iterates over every code in the directory, group by group.
    pub fn all_codes(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .flat_map(|entry| entry.codes.iter().map(String::as_str))
    }

    /// Returns the number of service type groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConceptDirectory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (tag, entries) in &self.groups {
            map.serialize_entry(tag, entries)?;
        }
        map.end()
    }
}

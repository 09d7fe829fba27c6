//! Service type tags.
//!
//! A service type partitions which section of a case document a concept
//! equivalence applies to. The catalog stores them as short string tags.

/// Service type of a catalog row.
///
/// Tags the catalog defines beyond the well-known ones are preserved as
/// [`ServiceType::Other`].
///
/// # Examples
///
/// ```
/// use tcr_types::ServiceType;
///
/// assert_eq!(ServiceType::from_tag("dxtc"), ServiceType::Diagnosis);
/// assert_eq!(ServiceType::from_tag("zztc").as_str(), "zztc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ServiceType {
    /// Diagnosis trigger code (`dxtc`).
    Diagnosis,
    /// Social history trigger code (`sdtc`).
    SocialHistory,
    /// Lab order trigger code (`lotc`).
    LabOrder,
    /// Lab result trigger code (`lrtc`).
    LabResult,
    /// Organism or substance trigger code (`ostc`).
    OrganismSubstance,
    /// Medication trigger code (`mrtc`).
    Medication,
    /// Any other catalog-defined tag.
    Other(String),
}

impl ServiceType {
    /// Tag for diagnosis trigger codes.
    pub const DIAGNOSIS_TAG: &'static str = "dxtc";
    /// Tag for social history trigger codes.
    pub const SOCIAL_HISTORY_TAG: &'static str = "sdtc";
    /// Tag for lab order trigger codes.
    pub const LAB_ORDER_TAG: &'static str = "lotc";
    /// Tag for lab result trigger codes.
    pub const LAB_RESULT_TAG: &'static str = "lrtc";
    /// Tag for organism/substance trigger codes.
    pub const ORGANISM_SUBSTANCE_TAG: &'static str = "ostc";
    /// Tag for medication trigger codes.
    pub const MEDICATION_TAG: &'static str = "mrtc";

    /// Creates a ServiceType from its catalog tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::DIAGNOSIS_TAG => Self::Diagnosis,
            Self::SOCIAL_HISTORY_TAG => Self::SocialHistory,
            Self::LAB_ORDER_TAG => Self::LabOrder,
            Self::LAB_RESULT_TAG => Self::LabResult,
            Self::ORGANISM_SUBSTANCE_TAG => Self::OrganismSubstance,
            Self::MEDICATION_TAG => Self::Medication,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the catalog tag for this service type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Diagnosis => Self::DIAGNOSIS_TAG,
            Self::SocialHistory => Self::SOCIAL_HISTORY_TAG,
            Self::LabOrder => Self::LAB_ORDER_TAG,
            Self::LabResult => Self::LAB_RESULT_TAG,
            Self::OrganismSubstance => Self::ORGANISM_SUBSTANCE_TAG,
            Self::Medication => Self::MEDICATION_TAG,
            Self::Other(tag) => tag,
        }
    }

    /// Returns true for diagnosis trigger codes, the only rows that carry an
    /// ICD-9 crosswalk.
    pub fn is_diagnosis(&self) -> bool {
        matches!(self, Self::Diagnosis)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ServiceType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ServiceType> for String {
    fn from(service_type: ServiceType) -> Self {
        service_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_roundtrip() {
        for tag in ["dxtc", "sdtc", "lotc", "lrtc", "ostc", "mrtc"] {
            let service_type = ServiceType::from_tag(tag);
            assert!(!matches!(service_type, ServiceType::Other(_)));
            assert_eq!(service_type.as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let service_type = ServiceType::from_tag("abcd");
        assert_eq!(service_type, ServiceType::Other("abcd".to_string()));
        assert_eq!(service_type.to_string(), "abcd");
        assert!(!service_type.is_diagnosis());
    }

    #[test]
    fn test_is_diagnosis() {
        assert!(ServiceType::Diagnosis.is_diagnosis());
        assert!(!ServiceType::SocialHistory.is_diagnosis());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_tag() {
        let json = serde_json::to_string(&ServiceType::SocialHistory).unwrap();
        assert_eq!(json, "\"sdtc\"");
        let parsed: ServiceType = serde_json::from_str("\"dxtc\"").unwrap();
        assert_eq!(parsed, ServiceType::Diagnosis);
    }
}

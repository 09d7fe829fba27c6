//! Condition-code extension.

use crate::well_known::{CONDITION_CODE_EXTENSION_URL, SNOMED_SYSTEM};

/// The `valueCoding` of a condition-code extension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueCoding {
    /// SNOMED trigger code.
    pub code: String,
    /// Always SNOMED CT.
    pub system: String,
}

/// Extension marking a FHIR resource as relevant to a reportable condition.
///
/// # Examples
///
/// ```
/// use tcr_types::{CodeExtension, well_known};
///
/// let ext = CodeExtension::condition("840539006");
/// assert_eq!(ext.url, well_known::CONDITION_CODE_EXTENSION_URL);
/// assert_eq!(ext.value_coding.system, well_known::SNOMED_SYSTEM);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CodeExtension {
    /// Extension URL.
    pub url: String,
    /// The stamped condition code.
    pub value_coding: ValueCoding,
}

impl CodeExtension {
    /// Creates the condition-code extension for a SNOMED trigger code.
    pub fn condition(snomed_code: &str) -> Self {
        Self {
            url: CONDITION_CODE_EXTENSION_URL.to_string(),
            value_coding: ValueCoding {
                code: snomed_code.to_string(),
                system: SNOMED_SYSTEM.to_string(),
            },
        }
    }

    /// Returns the extension as a FHIR JSON object.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url,
            "valueCoding": {
                "code": self.value_coding.code,
                "system": self.value_coding.system,
            }
        })
    }
}

//! Lookup response shapes.

use serde::Serialize;
use tcr_types::{ConceptDirectory, ConceptRow};

/// Result of a lookup as handed to upstream callers.
///
/// Serializes untagged: a directory object, a list of row tuples, or
/// `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupResponse {
    /// Aggregated concept directory.
    Concepts(ConceptDirectory),
    /// Raw catalog rows.
    Rows(Vec<ConceptRow>),
    /// A lookup failure, carrying the underlying message.
    Error {
        /// Failure message.
        error: String,
    },
}

impl LookupResponse {
    /// Wraps a failure message.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Error {
            error: message.to_string(),
        }
    }

    /// Returns true for the error shape.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

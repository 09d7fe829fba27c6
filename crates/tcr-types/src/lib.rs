//! # tcr-types
//!
//! Type definitions for trigger code reference lookups.
//!
//! This crate provides the plain data types shared by the catalog and FHIR
//! crates: raw catalog rows, the aggregated concept directory, service type
//! tags and the condition-code extension stamped onto FHIR resources.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization support via serde, including
//!   the JSON shapes consumed by downstream eCR tooling.
//!
//! ## Usage
//!
//! ```rust
//! use tcr_types::{ConceptDirectory, ConceptEntry, ConceptRow, ServiceType};
//! use tcr_types::well_known;
//!
//! let row = ConceptRow::new("dxtc", "A36.3|A36", well_known::ICD10_CM_SYSTEM);
//! assert_eq!(row.service_type(), ServiceType::Diagnosis);
//! assert_eq!(row.split_codes(), vec!["A36.3", "A36"]);
//!
//! let mut directory = ConceptDirectory::new();
//! directory.push("dxtc", ConceptEntry::new(row.split_codes(), row.system.clone()));
//! assert!(directory.contains_code("A36"));
//! ```

#![warn(missing_docs)]

mod code;
mod concept;
mod condition;
mod directory;
mod extension;
mod service_type;
pub mod well_known;

// Re-export all public types at crate root
pub use code::SnomedCode;
pub use concept::{CatalogRecord, ConceptRow, CODE_SEPARATOR};
pub use condition::ConditionRecord;
pub use directory::{ConceptDirectory, ConceptEntry};
pub use extension::{CodeExtension, ValueCoding};
pub use service_type::ServiceType;

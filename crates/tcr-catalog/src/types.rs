//! Catalog errors and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by catalog loading and lookups.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// More than one SNOMED code was supplied where exactly one is required.
    #[error("{count} SNOMED codes provided, lookup supports only 1")]
    UnsupportedMultiCode {
        /// Number of codes supplied.
        count: usize,
    },

    /// No SNOMED code was supplied to a lookup.
    #[error("no SNOMED code provided, lookup requires exactly 1")]
    EmptyLookup,

    /// The reference store failed while being accessed.
    ///
    /// Displays the underlying failure message unchanged.
    #[error("{0}")]
    Access(String),

    /// A SNOMED code has no display name in the catalog.
    #[error("no condition name found for SNOMED code {code}")]
    ConditionNotFound {
        /// The code that was looked up.
        code: String,
    },

    /// I/O error reading a catalog file.
    #[error("IO error reading catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Required field was empty.
    #[error("Missing value for required column: {column}")]
    MissingField {
        /// The name of the empty column.
        column: String,
    },

    /// Invalid boolean value.
    #[error("Invalid boolean value: {value} (expected 0 or 1)")]
    InvalidBoolean {
        /// The invalid boolean value.
        value: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the catalog directory.
    #[error("Required catalog file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },
}

impl CatalogError {
    /// Folds any failure raised while talking to a store into
    /// [`CatalogError::Access`], keeping the original message.
    pub fn access(err: CatalogError) -> Self {
        match err {
            Self::Access(_) => err,
            other => Self::Access(other.to_string()),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Configuration for loading catalog files.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Whether to drop inactive conditions (and their concept rows).
    pub active_only: bool,
    /// Field delimiter of the CSV files.
    pub delimiter: u8,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            active_only: true,
            delimiter: b',',
        }
    }
}

/// Discovered files in a catalog directory.
#[derive(Debug, Clone, Default)]
pub struct CatalogFiles {
    /// Path to the conditions file.
    pub conditions_file: Option<PathBuf>,
    /// Path to the concepts file.
    pub concepts_file: Option<PathBuf>,
}

impl CatalogFiles {
    /// Creates a new empty CatalogFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if both the conditions and concepts files are present.
    pub fn has_required_files(&self) -> bool {
        self.conditions_file.is_some() && self.concepts_file.is_some()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.conditions_file.is_none() {
            missing.push("conditions");
        }
        if self.concepts_file.is_none() {
            missing.push("concepts");
        }
        missing
    }
}

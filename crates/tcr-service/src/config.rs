//! Service configuration.

use std::path::PathBuf;

use tcr_catalog::CatalogConfig;

const DEFAULT_DATA_PATH: &str = "./data";

/// Startup configuration, built once and passed to collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Directory holding the catalog CSV files.
    pub data_path: PathBuf,
    /// Whether inactive conditions are dropped at load time.
    pub active_only: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            active_only: true,
        }
    }
}

impl ServiceConfig {
    /// Environment variable naming the catalog directory.
    pub const DATA_PATH_VAR: &'static str = "TCR_DATA_PATH";
    /// Environment variable controlling `active_only` (`true`/`false`).
    pub const ACTIVE_ONLY_VAR: &'static str = "TCR_ACTIVE_ONLY";

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup; unset or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            data_path: lookup(Self::DATA_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            active_only: lookup(Self::ACTIVE_ONLY_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.active_only),
        }
    }

    /// Returns the catalog loading configuration.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            active_only: self.active_only,
            ..Default::default()
        }
    }
}

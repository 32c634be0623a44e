//! Engine configuration.
//!
//! Passed explicitly into [`FailoverHistory::new`](crate::commands::FailoverHistory::new);
//! nothing here is read from process-global state.

#![allow(clippy::result_large_err)]

use std::path::Path;

use domain_audit_core::errors::{ExError, ExErrorKind};
use domain_audit_store::Result;
use serde::{Deserialize, Serialize};

/// Page size used when a list request does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Decompress snapshots while listing and attach full failover lists
    pub hydrate_list_responses: bool,
    /// Page size applied when a list request leaves it at zero
    pub default_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hydrate_list_responses: false,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn with_hydration(mut self, enabled: bool) -> Self {
        self.hydrate_list_responses = enabled;
        self
    }

    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Parse a TOML document; absent keys take their defaults
    ///
    /// # Errors
    ///
    /// - `Config` — the text is not valid TOML for this shape, or a value is out of range
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text).map_err(|e| {
            ExError::new(ExErrorKind::Config)
                .with_op("load_engine_config")
                .with_message(e.to_string())
        })?;
        config.validate()
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// - `Io` — the file could not be read
    /// - `Config` — see [`EngineConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_engine_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(self) -> Result<Self> {
        if self.default_page_size == 0 {
            return Err(ExError::new(ExErrorKind::Config)
                .with_op("load_engine_config")
                .with_message("default_page_size must be positive"));
        }
        Ok(self)
    }
}

//! # Configuration
//!
//! Engine settings are managed by [`confique`], which layers environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FIELDWISE_MAX_DEPTH`
//! 2. **Config file**: the path given to [`InspectConfig::load`], if any
//! 3. **Compiled defaults**: via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `max_depth` | `32` | Nesting bound for structural copies (at least 1) |
//! | `search_ignore` | none | Type name to attribute names hidden from search |
//!
//! ## Example
//!
//! ```toml
//! max_depth = 8
//!
//! [search_ignore]
//! Widget = ["tag", "internal_notes"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::attributes::Exclusions;
use crate::copy::{CopyOptions, DEFAULT_MAX_DEPTH};
use crate::error::{Error, Result};

/// Configuration for the inspection engines, stored in `fieldwise.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Maximum nesting depth for structural copies. Nested values deeper than
    /// this are left untouched on the target.
    #[config(default = 32, env = "FIELDWISE_MAX_DEPTH")]
    pub max_depth: usize,

    /// Attributes to hide from search, keyed by type name.
    pub search_ignore: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            search_ignore: None,
        }
    }
}

impl InspectConfig {
    /// Load from the environment and an optional TOML file, then validate.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// A commented TOML template listing every setting.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    pub fn exclusions(&self) -> Exclusions {
        self.search_ignore
            .iter()
            .flatten()
            .map(|(type_name, attrs)| (type_name.clone(), attrs.clone()))
            .collect()
    }

    pub fn copy_options(&self) -> CopyOptions {
        CopyOptions {
            max_depth: self.max_depth,
        }
    }
}

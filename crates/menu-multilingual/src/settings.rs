//! Menu block settings.
//!
//! Stored with the block placement and exported through config storage as
//! YAML, e.g.:
//!
//! ```yaml
//! only_translated_labels: true
//! only_translated_content: false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// Default maximum menu depth evaluated by the filter.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Language filter settings for one menu block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuFilterSettings {
    /// Hide links whose label is not available in the current language.
    #[serde(default)]
    pub only_translated_labels: bool,

    /// Hide links whose target entity is not available in the current language.
    #[serde(default)]
    pub only_translated_content: bool,

    /// Nodes nested deeper than this are dropped.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for MenuFilterSettings {
    fn default() -> Self {
        Self {
            only_translated_labels: false,
            only_translated_content: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MenuFilterSettings {
    /// Parse settings from a YAML config export.
    pub fn from_yaml(yaml: &str) -> FilterResult<Self> {
        let settings: Self = serde_yml::from_str(yaml)
            .map_err(|e| FilterError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a block's JSON settings value.
    pub fn from_json(value: serde_json::Value) -> FilterResult<Self> {
        let settings: Self = serde_json::from_value(value)
            .map_err(|e| FilterError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> FilterResult<()> {
        if self.max_depth == 0 {
            return Err(FilterError::InvalidSettings(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Menu block render payloads.
//!
//! A menu block builds `{"content": {"#items": [...]}, "#cache": {...}}`.
//! After filtering, a block with no items left collapses to an empty markup
//! element so the theme can skip the block wrapper. Cache metadata is
//! carried over unchanged either way.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::services::LanguageResolver;

use super::filter::MenuLanguageFilter;
use super::tree::MenuNode;

/// Cacheability of a render element.
///
/// Kept as the raw `#cache` object so every key (`keys`, `bin`, `tags`,
/// `contexts`, `max-age`, ...) reaches the renderer exactly as built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheMetadata(Map<String, Value>);

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list("tags", tags)
    }

    pub fn contexts<I, S>(self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list("contexts", contexts)
    }

    /// Seconds; `-1` means permanent.
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.0.insert("max-age".into(), Value::from(seconds));
        self
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|v| Value::String(v.into()))
            .collect();
        self.0.insert(key.into(), Value::Array(values));
        self
    }
}

impl From<Map<String, Value>> for CacheMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The `content` element of a menu block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuBlockContent {
    #[serde(rename = "#items", default)]
    pub items: Vec<MenuNode>,

    /// Other render keys (`#theme`, `#menu_name`, ...), passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A menu block's render array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuBlockBuild {
    pub content: MenuBlockContent,

    #[serde(rename = "#cache", default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheMetadata>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuBlockBuild {
    pub fn new(items: Vec<MenuNode>, cache: CacheMetadata) -> Self {
        Self {
            content: MenuBlockContent {
                items,
                extra: Map::new(),
            },
            cache: Some(cache),
            extra: Map::new(),
        }
    }
}

/// Render array for a block with nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyBuild {
    #[serde(rename = "#markup")]
    pub markup: String,

    #[serde(rename = "#cache", default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheMetadata>,
}

/// Result of filtering a menu block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockBuild {
    Menu(MenuBlockBuild),
    Empty(EmptyBuild),
}

impl BlockBuild {
    pub fn is_empty(&self) -> bool {
        matches!(self, BlockBuild::Empty(_))
    }

    pub fn cache(&self) -> Option<&CacheMetadata> {
        match self {
            BlockBuild::Menu(build) => build.cache.as_ref(),
            BlockBuild::Empty(build) => build.cache.as_ref(),
        }
    }

    /// Surviving menu items; empty for an empty build.
    pub fn items(&self) -> &[MenuNode] {
        match self {
            BlockBuild::Menu(build) => &build.content.items,
            BlockBuild::Empty(_) => &[],
        }
    }
}

impl MenuLanguageFilter {
    /// Filter the items of a menu block build.
    ///
    /// The current language is read from `language` once. If no items
    /// survive, the build collapses to [`EmptyBuild`] carrying the original
    /// cache metadata.
    pub fn filter_render_payload(
        &self,
        mut build: MenuBlockBuild,
        language: &dyn LanguageResolver,
    ) -> BlockBuild {
        let lang = language.current_language();
        let items = std::mem::take(&mut build.content.items);
        build.content.items = self.filter_tree(&items, lang.as_str());

        if build.content.items.is_empty() {
            debug!(language = %lang, "menu block has no items left, hiding block");
            return BlockBuild::Empty(EmptyBuild {
                markup: String::new(),
                cache: build.cache,
            });
        }
        BlockBuild::Menu(build)
    }

    /// Filter a menu block build given as JSON.
    pub fn filter_render_json(
        &self,
        build: Value,
        language: &dyn LanguageResolver,
    ) -> FilterResult<Value> {
        let build: MenuBlockBuild = serde_json::from_value(build)
            .map_err(|e| FilterError::InvalidPayload(e.to_string()))?;
        let filtered = self.filter_render_payload(build, language);
        serde_json::to_value(&filtered).map_err(|e| FilterError::InvalidPayload(e.to_string()))
    }
}

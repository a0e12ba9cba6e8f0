//! Menu link records as seen by the filter.
//!
//! Links are either static (defined in code by a plugin, no language of
//! their own) or content links (stored records with a label language and
//! optional translations).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Translatable;

/// Route name prefix for routes that point at an entity.
pub const ENTITY_ROUTE_PREFIX: &str = "entity.";

/// Route identity of a link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRef {
    /// Route machine name (e.g., "entity.node.canonical").
    pub name: String,

    /// Route parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<(String, String)>,
}

impl RouteRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Entity addressed by this route, as `(entity_type, id)`.
    ///
    /// Only routes named `entity.*` address entities. The first parameter's
    /// name is the entity type and its value the id; any further parameters
    /// are ignored. Returns `None` if either part is empty.
    ///
    /// An id of `"0"` is a real id: it is looked up like any other, so a
    /// missing entity 0 surfaces as a not-found error rather than silently
    /// counting as "no content".
    pub fn entity_target(&self) -> Option<(&str, &str)> {
        if !self.name.starts_with(ENTITY_ROUTE_PREFIX) {
            return None;
        }
        let (entity_type, id) = self.parameters.first()?;
        if entity_type.is_empty() || id.is_empty() {
            return None;
        }
        Some((entity_type, id))
    }
}

/// A link defined by a plugin rather than stored as content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLink {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteRef>,
}

/// A menu link stored as translatable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLink {
    /// Unique identifier (UUIDv7). Generated when a payload omits it.
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,

    /// Display title in the link's own language.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteRef>,

    /// Language of the link label.
    pub langcode: String,

    #[serde(default = "default_true")]
    pub translatable: bool,

    /// Languages the label has been translated into, including `langcode`.
    #[serde(default)]
    pub translation_languages: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

impl ContentLink {
    pub fn new(title: impl Into<String>, langcode: impl Into<String>) -> Self {
        let langcode = langcode.into();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            route: None,
            translation_languages: BTreeSet::from([langcode.clone()]),
            langcode,
            translatable: true,
        }
    }

    pub fn with_route(mut self, route: RouteRef) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_translation(mut self, lang: impl Into<String>) -> Self {
        self.translation_languages.insert(lang.into());
        self
    }

    pub fn untranslatable(mut self) -> Self {
        self.translatable = false;
        self
    }
}

impl Translatable for ContentLink {
    fn langcode(&self) -> &str {
        &self.langcode
    }

    fn translation_enabled(&self) -> bool {
        self.translatable
    }

    fn translation_languages(&self) -> &BTreeSet<String> {
        &self.translation_languages
    }
}

/// The link record behind a menu tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuLink {
    Static(StaticLink),
    Content(ContentLink),
}

impl MenuLink {
    /// Create a static link.
    pub fn static_link(title: impl Into<String>, route: Option<RouteRef>) -> Self {
        MenuLink::Static(StaticLink {
            title: title.into(),
            route,
        })
    }

    pub fn route(&self) -> Option<&RouteRef> {
        match self {
            MenuLink::Static(link) => link.route.as_ref(),
            MenuLink::Content(link) => link.route.as_ref(),
        }
    }

    /// The link's label language capability, if it has one.
    pub fn as_translatable(&self) -> Option<&dyn Translatable> {
        match self {
            MenuLink::Static(_) => None,
            MenuLink::Content(link) => Some(link),
        }
    }
}

impl From<ContentLink> for MenuLink {
    fn from(link: ContentLink) -> Self {
        MenuLink::Content(link)
    }
}

impl From<StaticLink> for MenuLink {
    fn from(link: StaticLink) -> Self {
        MenuLink::Static(link)
    }
}

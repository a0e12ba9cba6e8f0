//! Language filter for menu trees.
//!
//! Two independent checks decide whether a link is shown:
//! - label: the link's own title exists in the current language
//! - content: the entity the link routes to exists in the current language
//!
//! With both enabled a link must satisfy both. With neither enabled the
//! filter is inert and returns the tree as given.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{FilterError, FilterResult};
use crate::models::{EntityRef, MenuLink, RouteRef, Translatable};
use crate::services::EntityStorage;
use crate::settings::{DEFAULT_MAX_DEPTH, MenuFilterSettings};

use super::tree::MenuNode;

/// Which checks a filter applies. Fixed for the life of the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    pub filter_labels: bool,
    pub filter_content: bool,
}

impl FilterPolicy {
    pub fn new(filter_labels: bool, filter_content: bool) -> Self {
        Self {
            filter_labels,
            filter_content,
        }
    }

    /// True when no check is enabled and every node passes.
    pub fn is_inert(&self) -> bool {
        !self.filter_labels && !self.filter_content
    }
}

impl From<&MenuFilterSettings> for FilterPolicy {
    fn from(settings: &MenuFilterSettings) -> Self {
        Self::new(
            settings.only_translated_labels,
            settings.only_translated_content,
        )
    }
}

/// Whether a link's label is available in `lang`.
///
/// Static links have no label language and always pass. Content links pass
/// when written in `lang` or translated into it.
pub fn link_label_translated(link: &MenuLink, lang: &str) -> bool {
    match link.as_translatable() {
        None => true,
        Some(record) => record.langcode() == lang || record.has_translation(lang),
    }
}

/// Entities loaded during one filter pass, including misses.
struct EntityMemo<'s> {
    storage: &'s dyn EntityStorage,
    loaded: HashMap<(String, String), Option<EntityRef>>,
}

impl<'s> EntityMemo<'s> {
    fn new(storage: &'s dyn EntityStorage) -> Self {
        Self {
            storage,
            loaded: HashMap::new(),
        }
    }

    fn load(&mut self, entity_type: &str, id: &str) -> anyhow::Result<Option<&EntityRef>> {
        let entity = match self
            .loaded
            .entry((entity_type.to_string(), id.to_string()))
        {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                // Storage errors are not memoized; a later node may retry.
                let loaded = self.storage.load(entity_type, id)?;
                entry.insert(loaded)
            }
        };
        Ok(entity.as_ref())
    }
}

/// Prunes menu trees to links available in the current language.
#[derive(Clone)]
pub struct MenuLanguageFilter {
    policy: FilterPolicy,
    max_depth: usize,
    storage: Arc<dyn EntityStorage>,
}

impl MenuLanguageFilter {
    /// Create an inert filter; every node passes.
    pub fn new(storage: Arc<dyn EntityStorage>) -> Self {
        Self::with_policy(FilterPolicy::default(), storage)
    }

    pub fn with_policy(policy: FilterPolicy, storage: Arc<dyn EntityStorage>) -> Self {
        Self {
            policy,
            max_depth: DEFAULT_MAX_DEPTH,
            storage,
        }
    }

    /// Create a filter from a block's stored settings.
    pub fn from_settings(
        settings: &MenuFilterSettings,
        storage: Arc<dyn EntityStorage>,
    ) -> FilterResult<Self> {
        settings.validate()?;
        Ok(Self {
            policy: FilterPolicy::from(settings),
            max_depth: settings.max_depth,
            storage,
        })
    }

    pub fn policy(&self) -> FilterPolicy {
        self.policy
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Filter a menu tree for `lang`.
    ///
    /// Children are filtered before their parent is evaluated, but a parent
    /// left with no children is kept if it passes on its own. Sibling order
    /// is preserved. A node whose evaluation fails is dropped along with its
    /// subtree; the rest of the tree is unaffected.
    pub fn filter_tree(&self, tree: &[MenuNode], lang: &str) -> Vec<MenuNode> {
        if self.policy.is_inert() {
            debug!(language = %lang, "menu language filter inert, tree unchanged");
            return tree.to_vec();
        }

        let mut memo = EntityMemo::new(self.storage.as_ref());
        self.filter_level(tree, lang, 1, &mut memo)
    }

    fn filter_level(
        &self,
        nodes: &[MenuNode],
        lang: &str,
        depth: usize,
        memo: &mut EntityMemo<'_>,
    ) -> Vec<MenuNode> {
        if depth > self.max_depth {
            warn!(
                depth,
                max_depth = self.max_depth,
                dropped = nodes.len(),
                "menu tree exceeds maximum depth, dropping subtree"
            );
            return Vec::new();
        }

        let mut kept = Vec::with_capacity(nodes.len());
        for node in nodes {
            let children = if node.children.is_empty() {
                Vec::new()
            } else {
                self.filter_level(&node.children, lang, depth + 1, memo)
            };

            match self.evaluate(&node.original_link, lang, memo) {
                Ok(true) => kept.push(MenuNode {
                    key: node.key.clone(),
                    original_link: node.original_link.clone(),
                    children,
                    attributes: node.attributes.clone(),
                }),
                Ok(false) => {
                    debug!(key = %node.key, language = %lang, "menu link not available in language");
                }
                Err(e) => {
                    warn!(key = %node.key, language = %lang, error = %e, "menu link check failed, hiding link");
                }
            }
        }
        kept
    }

    /// Whether a single link passes the filter for `lang`.
    pub fn passes(&self, link: &MenuLink, lang: &str) -> FilterResult<bool> {
        let mut memo = EntityMemo::new(self.storage.as_ref());
        self.evaluate(link, lang, &mut memo)
    }

    fn evaluate(
        &self,
        link: &MenuLink,
        lang: &str,
        memo: &mut EntityMemo<'_>,
    ) -> FilterResult<bool> {
        let FilterPolicy {
            filter_labels,
            filter_content,
        } = self.policy;

        match (filter_labels, filter_content) {
            (false, false) => Ok(true),
            (true, false) => Ok(link_label_translated(link, lang)),
            (false, true) => self.content_translated(link, lang, memo),
            // A failed label check decides the outcome without touching storage.
            (true, true) => Ok(link_label_translated(link, lang)
                && self.content_translated(link, lang, memo)?),
        }
    }

    /// Whether the entity a link routes to is authored in or translated
    /// into `lang`.
    ///
    /// Links without an `entity.*` route, or whose first route parameter is
    /// empty, do not reference content and fail. A route naming an entity
    /// that does not exist is an error.
    pub fn entity_translated_or_default(&self, link: &MenuLink, lang: &str) -> FilterResult<bool> {
        let mut memo = EntityMemo::new(self.storage.as_ref());
        self.content_translated(link, lang, &mut memo)
    }

    fn content_translated(
        &self,
        link: &MenuLink,
        lang: &str,
        memo: &mut EntityMemo<'_>,
    ) -> FilterResult<bool> {
        let Some((entity_type, id)) = link.route().and_then(RouteRef::entity_target) else {
            return Ok(false);
        };

        let entity = memo
            .load(entity_type, id)?
            .ok_or_else(|| FilterError::EntityNotFound {
                entity_type: entity_type.to_string(),
                id: id.to_string(),
            })?;

        Ok(entity.langcode == lang || entity.has_translation(lang))
    }
}

impl std::fmt::Debug for MenuLanguageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuLanguageFilter")
            .field("policy", &self.policy)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

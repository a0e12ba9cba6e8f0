//! Shared fixtures for menu filter integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use menu_multilingual::MenuNode;
use menu_multilingual::models::{ContentLink, EntityRef, MenuLink, RouteRef};
use menu_multilingual::services::{EntityStorage, MemoryEntityStorage};

/// Entity storage that counts loads and can simulate backend failures.
#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: MemoryEntityStorage,
    loads: AtomicUsize,
    fail_type: Option<String>,
}

impl CountingStorage {
    pub fn new(entities: impl IntoIterator<Item = EntityRef>) -> Self {
        Self {
            inner: entities.into_iter().collect(),
            loads: AtomicUsize::new(0),
            fail_type: None,
        }
    }

    /// Fail every load of `entity_type` with a backend error.
    pub fn failing_on(mut self, entity_type: &str) -> Self {
        self.fail_type = Some(entity_type.to_string());
        self
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl EntityStorage for CountingStorage {
    fn load(&self, entity_type: &str, id: &str) -> anyhow::Result<Option<EntityRef>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_type.as_deref() == Some(entity_type) {
            anyhow::bail!("connection reset while loading {entity_type} {id}");
        }
        self.inner.load(entity_type, id)
    }
}

/// Site content used across tests:
/// - node 1: en, translated to fr
/// - node 2: en only
/// - node 3: fr only
/// - node 4: de, translation disabled
/// - media 5: language not applicable
pub fn site_storage() -> Arc<CountingStorage> {
    Arc::new(CountingStorage::new([
        EntityRef::new("node", "1", "en").with_translation("fr"),
        EntityRef::new("node", "2", "en"),
        EntityRef::new("node", "3", "fr"),
        EntityRef::new("node", "4", "de").untranslatable(),
        EntityRef::new("media", "5", "zxx"),
    ]))
}

pub fn node_route(nid: &str) -> RouteRef {
    RouteRef::new("entity.node.canonical").with_parameter("node", nid)
}

/// Content link with label in `langcode` pointing at node `nid`.
pub fn content_node(key: &str, langcode: &str, nid: &str) -> MenuNode {
    MenuNode::new(
        key,
        ContentLink::new(key, langcode).with_route(node_route(nid)),
    )
}

/// Content link with label in `langcode` and no route.
pub fn label_only(key: &str, langcode: &str) -> MenuNode {
    MenuNode::new(key, ContentLink::new(key, langcode))
}

pub fn static_node(key: &str) -> MenuNode {
    MenuNode::new(key, MenuLink::static_link(key, Some(RouteRef::new("front"))))
}

/// Keys of a tree, depth-first, with children in brackets.
pub fn shape(nodes: &[MenuNode]) -> String {
    nodes
        .iter()
        .map(|n| {
            if n.children.is_empty() {
                n.key.clone()
            } else {
                format!("{}[{}]", n.key, shape(&n.children))
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// A mixed multilingual main menu. The "legal" link has translation
/// disabled.
pub fn main_menu() -> Vec<MenuNode> {
    vec![
        static_node("home"),
        content_node("about", "en", "1")
            .child(content_node("team", "en", "2"))
            .child(content_node("equipe", "fr", "3")),
        label_only("blog", "fr"),
        MenuNode::new(
            "legal",
            ContentLink::new("legal", "de")
                .untranslatable()
                .with_route(node_route("4")),
        )
        .child(static_node("imprint")),
        content_node("gallery", "en", "2").child(
            MenuNode::new(
                "photo",
                ContentLink::new("photo", "zxx").with_route(
                    RouteRef::new("entity.media.canonical").with_parameter("media", "5"),
                ),
            ),
        ),
    ]
}

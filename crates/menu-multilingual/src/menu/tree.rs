//! Menu tree nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::MenuLink;

/// One entry in a rendered menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Key unique among siblings.
    pub key: String,

    /// The link record this node renders.
    pub original_link: MenuLink,

    /// Child entries, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,

    /// Any other render keys on the item (`title`, `url`, `in_active_trail`,
    /// ...), owned by the theme layer and passed through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MenuNode {
    pub fn new(key: impl Into<String>, original_link: impl Into<MenuLink>) -> Self {
        Self {
            key: key.into(),
            original_link: original_link.into(),
            children: Vec::new(),
            attributes: Map::new(),
        }
    }

    /// Append a child node.
    pub fn child(mut self, node: MenuNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn attr(mut self, key: &str, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

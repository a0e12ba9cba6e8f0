//! Menu trees and the language filter applied to them.
//!
//! Menu blocks hand their already-built tree to [`MenuLanguageFilter`],
//! which drops links unavailable in the current language:
//! - label filtering checks the link's own title translation
//! - content filtering checks the entity the link routes to

mod filter;
mod render;
mod tree;

pub use filter::{FilterPolicy, MenuLanguageFilter, link_label_translated};
pub use render::{BlockBuild, CacheMetadata, EmptyBuild, MenuBlockBuild, MenuBlockContent};
pub use tree::MenuNode;

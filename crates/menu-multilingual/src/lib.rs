//! Multilingual menu filtering.
//!
//! Prunes a rendered navigation tree so that only links whose label or
//! linked content exists in the current display language are shown. The
//! menu tree, entity storage and language negotiation are all supplied by
//! the host; this crate only decides which nodes survive.

pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod settings;

pub use error::{FilterError, FilterResult};
pub use menu::{
    BlockBuild, CacheMetadata, FilterPolicy, MenuBlockBuild, MenuLanguageFilter, MenuNode,
};
pub use settings::MenuFilterSettings;

//! Records the filter inspects: languages, menu links and linked entities.

pub mod entity;
pub mod language;
pub mod menu_link;

pub use entity::{EntityRef, Translatable};
pub use language::{LANGCODE_NOT_APPLICABLE, LANGCODE_NOT_SPECIFIED, ResolvedLanguage};
pub use menu_link::{ContentLink, MenuLink, RouteRef, StaticLink};

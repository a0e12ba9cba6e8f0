//! Collaborators the filter depends on.
//!
//! The host supplies entity storage and language negotiation; the filter
//! only talks to them through these traits.

mod entity_storage;

pub use entity_storage::{EntityStorage, MemoryEntityStorage};

use crate::models::ResolvedLanguage;

/// Source of the current display language.
///
/// Read once per filter invocation.
pub trait LanguageResolver: Send + Sync {
    fn current_language(&self) -> ResolvedLanguage;
}

impl LanguageResolver for ResolvedLanguage {
    fn current_language(&self) -> ResolvedLanguage {
        self.clone()
    }
}

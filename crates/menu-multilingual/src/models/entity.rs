//! Entities referenced by menu links, and the translation capability they
//! share with content menu links.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::language::is_locked_langcode;

/// A record that can exist in more than one language.
///
/// Implemented by content entities and by content menu links. Records
/// without this capability (static links) have no language semantics.
pub trait Translatable {
    /// Language the record was originally authored in.
    fn langcode(&self) -> &str;

    /// Whether translation is enabled for this record's type/bundle.
    fn translation_enabled(&self) -> bool;

    /// Every language the record exists in, including its default language.
    fn translation_languages(&self) -> &BTreeSet<String>;

    /// Whether per-language variants apply to this record at all.
    ///
    /// False when translation is disabled or the record's language is
    /// "not specified" / "not applicable".
    fn is_translatable(&self) -> bool {
        self.translation_enabled() && !is_locked_langcode(self.langcode())
    }

    /// Whether the record is available in `lang`.
    ///
    /// Non-translatable records always pass: without language semantics
    /// they apply to every language.
    fn has_translation(&self, lang: &str) -> bool {
        if !self.is_translatable() {
            return true;
        }
        self.translation_languages().contains(lang)
    }
}

/// An entity resolved from a menu link's route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Entity type machine name (e.g., "node", "taxonomy_term").
    pub entity_type: String,

    /// Entity identifier as it appears in route parameters.
    pub id: String,

    /// Default (authored) language.
    pub langcode: String,

    /// Whether the entity's bundle has translation enabled.
    #[serde(default = "default_true")]
    pub translatable: bool,

    /// Languages the entity exists in.
    #[serde(default)]
    pub translation_languages: BTreeSet<String>,
}

fn default_true() -> bool {
    true
}

impl EntityRef {
    /// Create a translatable entity that exists only in its default language.
    pub fn new(
        entity_type: impl Into<String>,
        id: impl Into<String>,
        langcode: impl Into<String>,
    ) -> Self {
        let langcode = langcode.into();
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            translation_languages: BTreeSet::from([langcode.clone()]),
            langcode,
            translatable: true,
        }
    }

    /// Add a translation language.
    pub fn with_translation(mut self, lang: impl Into<String>) -> Self {
        self.translation_languages.insert(lang.into());
        self
    }

    /// Disable translation for this entity.
    pub fn untranslatable(mut self) -> Self {
        self.translatable = false;
        self
    }
}

impl Translatable for EntityRef {
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

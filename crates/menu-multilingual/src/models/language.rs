//! Language codes.
//!
//! Codes follow the BCP 47 primary-subtag shape used across the site
//! ("en", "fr", "pt-br", "zh-hans"). Two reserved codes mark content that
//! has no language semantics and is therefore never filtered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// Language of the record is not specified.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// Language does not apply to the record (e.g. an image or a code sample).
pub const LANGCODE_NOT_APPLICABLE: &str = "zxx";

/// Whether a langcode is one of the reserved "no language" codes.
pub fn is_locked_langcode(langcode: &str) -> bool {
    langcode == LANGCODE_NOT_SPECIFIED || langcode == LANGCODE_NOT_APPLICABLE
}

/// Validate that a language ID follows BCP 47 primary subtag format.
///
/// Accepts: lowercase alpha 2-3 chars, optionally followed by hyphen-separated
/// alphanumeric subtags.
pub fn validate_language_id(id: &str) -> FilterResult<()> {
    if id.is_empty() || id.len() > 12 {
        return Err(FilterError::InvalidLanguage(format!(
            "language ID must be 1-12 characters, got '{id}'"
        )));
    }

    let mut parts = id.split('-');

    match parts.next() {
        Some(primary)
            if (2..=3).contains(&primary.len())
                && primary.bytes().all(|b| b.is_ascii_lowercase()) => {}
        _ => {
            return Err(FilterError::InvalidLanguage(format!(
                "language ID must start with a 2-3 lowercase letter primary subtag, got '{id}'"
            )));
        }
    }

    for subtag in parts {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(FilterError::InvalidLanguage(format!(
                "language ID subtag must be 1-8 alphanumeric characters, got '{subtag}' in '{id}'"
            )));
        }
    }

    Ok(())
}

/// The display language resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResolvedLanguage(String);

impl ResolvedLanguage {
    /// Validate and wrap a language code.
    pub fn new(code: impl Into<String>) -> FilterResult<Self> {
        let code = code.into();
        validate_language_id(&code)?;
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResolvedLanguage {
    type Error = FilterError;

    fn try_from(value: String) -> FilterResult<Self> {
        Self::new(value)
    }
}

impl From<ResolvedLanguage> for String {
    fn from(lang: ResolvedLanguage) -> Self {
        lang.0
    }
}

impl AsRef<str> for ResolvedLanguage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

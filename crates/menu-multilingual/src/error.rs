//! Filter error types.

use thiserror::Error;

/// Errors raised while evaluating menu links.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{entity_type} '{id}' referenced by menu link not found")]
    EntityNotFound { entity_type: String, id: String },

    #[error("entity storage error")]
    Storage(#[from] anyhow::Error),

    #[error("invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("invalid menu filter settings: {0}")]
    InvalidSettings(String),

    #[error("invalid menu block payload: {0}")]
    InvalidPayload(String),
}

/// Result type alias using FilterError.
pub type FilterResult<T> = Result<T, FilterError>;

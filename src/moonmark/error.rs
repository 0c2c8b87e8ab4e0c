//! Errors surfaced by the formatter facade

use crate::moonmark::transforms::TransformError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// A pipeline stage broke one of its invariants.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The highlight vocabulary could not be compiled into a matcher.
    #[error("invalid highlight vocabulary: {0}")]
    InvalidVocabulary(#[from] regex::Error),

    #[error("failed to serialize blocks: {0}")]
    Serialization(#[from] serde_json::Error),
}

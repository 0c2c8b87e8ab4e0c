//! JSON serialization of the typed block sequence

use crate::moonmark::ast::Block;
use crate::moonmark::error::FormatError;

/// Pretty-printed JSON array of blocks, inline nodes included.
pub fn to_json(blocks: &[Block]) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

//! Inline parsing primitives
//!
//! This module exposes the inline nodes, the logos tokenizer for `*` delimiters, the
//! emphasis parser built on it, and the keyword highlighter that runs over parsed nodes.

mod highlight;
mod nodes;
mod parser;
mod tokens;

pub use highlight::Highlighter;
pub use nodes::{InlineContent, InlineNode};
pub use parser::parse_inlines;
pub use tokens::{tokenize, InlineToken};

//! TextContent facade for the visible text of a block
//!
//! Structural stages store the payload of a line as plain text. The inline stage later
//! parses it into [`InlineNode`]s, keeping the raw string alongside. Consumers use the
//! accessor methods and do not need to know which representation is current.

use crate::moonmark::inlines::{parse_inlines, InlineContent, InlineNode};
use serde::Serialize;

/// Visible text of a header, list item, paragraph or quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    #[serde(flatten)]
    inner: TextRepresentation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
enum TextRepresentation {
    /// Raw payload, may still contain `*` delimiters.
    Text { raw: String },
    /// Parsed inline nodes along with the original raw string.
    Inlines { raw: String, nodes: InlineContent },
}

impl TextContent {
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            inner: TextRepresentation::Text { raw: text.into() },
        }
    }

    /// The payload exactly as it appeared in the source line (prefix stripped).
    pub fn as_string(&self) -> &str {
        match &self.inner {
            TextRepresentation::Text { raw } => raw,
            TextRepresentation::Inlines { raw, .. } => raw,
        }
    }

    /// Returns the parsed inline nodes when the inline stage has run.
    pub fn inline_nodes(&self) -> Option<&[InlineNode]> {
        match &self.inner {
            TextRepresentation::Inlines { nodes, .. } => Some(nodes),
            TextRepresentation::Text { .. } => None,
        }
    }

    /// Parse inline nodes (if not already parsed) and store them in this TextContent.
    pub fn ensure_inline_parsed(&mut self) {
        if let TextRepresentation::Text { raw } = &mut self.inner {
            let raw = std::mem::take(raw);
            let nodes = parse_inlines(&raw);
            self.inner = TextRepresentation::Inlines { raw, nodes };
        }
    }

    /// Rewrite the parsed inline nodes. Parses first if needed.
    pub fn map_inlines<F>(&mut self, f: F)
    where
        F: FnOnce(InlineContent) -> InlineContent,
    {
        self.ensure_inline_parsed();
        if let TextRepresentation::Inlines { nodes, .. } = &mut self.inner {
            let taken = std::mem::take(nodes);
            *nodes = f(taken);
        }
    }

    /// Visible text: delimiters that formed spans are dropped, unmatched ones kept.
    ///
    /// Before inline parsing this is the raw payload.
    pub fn plain_text(&self) -> String {
        match &self.inner {
            TextRepresentation::Text { raw } => raw.clone(),
            TextRepresentation::Inlines { nodes, .. } => {
                let mut out = String::new();
                for node in nodes {
                    node.collect_text(&mut out);
                }
                out
            }
        }
    }
}

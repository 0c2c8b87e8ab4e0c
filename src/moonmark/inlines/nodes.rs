//! Inline nodes produced from a [`TextContent`](crate::moonmark::ast::TextContent).

use serde::Serialize;

/// Sequence of inline nodes.
pub type InlineContent = Vec<InlineNode>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text segment with no formatting.
    Plain(String),
    /// Strong emphasis delimited by `**`.
    Strong(InlineContent),
    /// Emphasis delimited by `*`.
    Emphasis(InlineContent),
    /// A vocabulary word, original case preserved.
    Highlight(String),
}

impl InlineNode {
    /// Append the visible text of this node and its children.
    pub fn collect_text(&self, out: &mut String) {
        match self {
            InlineNode::Plain(text) | InlineNode::Highlight(text) => out.push_str(text),
            InlineNode::Strong(children) | InlineNode::Emphasis(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

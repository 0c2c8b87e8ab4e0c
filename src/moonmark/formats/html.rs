//! Markup serialization (blocks → HTML fragment)
//!
//! Blocks are rendered back to back with no separators and no wrapping element. Text is
//! emitted as-is unless [`RenderOptions::escape_text`] is set; the consumer of the fragment
//! is expected to trust or sanitize the narrative's origin.

use crate::moonmark::ast::{Block, ListItem, TextContent};
use crate::moonmark::inlines::InlineNode;
use crate::moonmark::transforms::{Runnable, TransformError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>` and `"` in visible text.
    pub escape_text: bool,
}

/// Final stage: `Vec<Block> -> String`.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        for block in blocks {
            self.render_block(block, &mut out);
        }
        out
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::SectionHeader(header) => {
                out.push_str("<div class=\"section-header\"><span class=\"section-number\">");
                out.push_str(&header.number);
                out.push_str(".</span> <span class=\"section-icon\">");
                out.push_str(&header.icon);
                out.push_str("</span> ");
                self.render_text(&header.title, out);
                out.push_str("</div>");
            }
            Block::SubsectionHeader(header) => {
                out.push_str("<h4><span class=\"subsection-number\">");
                out.push_str(&header.number);
                out.push_str("</span> ");
                self.render_text(&header.title, out);
                out.push_str("</h4>");
            }
            Block::List(list) => {
                out.push_str("<ul>");
                for item in &list.items {
                    self.render_item(item, out);
                }
                out.push_str("</ul>");
            }
            Block::Paragraph(paragraph) => {
                out.push_str("<p>");
                self.render_text(&paragraph.text, out);
                out.push_str("</p>");
            }
            Block::Quote(quote) => {
                out.push_str("<blockquote>");
                self.render_text(&quote.text, out);
                out.push_str("</blockquote>");
            }
        }
    }

    fn render_item(&self, item: &ListItem, out: &mut String) {
        match item.class_tag {
            Some(tag) => {
                out.push_str("<li class=\"");
                out.push_str(tag.css_class());
                out.push_str("\">");
            }
            None => out.push_str("<li>"),
        }
        self.render_text(&item.text, out);
        out.push_str("</li>");
    }

    fn render_text(&self, text: &TextContent, out: &mut String) {
        match text.inline_nodes() {
            Some(nodes) => {
                for node in nodes {
                    self.render_inline(node, out);
                }
            }
            None => self.push_text(text.as_string(), out),
        }
    }

    fn render_inline(&self, node: &InlineNode, out: &mut String) {
        match node {
            InlineNode::Plain(text) => self.push_text(text, out),
            InlineNode::Strong(children) => {
                out.push_str("<strong>");
                for child in children {
                    self.render_inline(child, out);
                }
                out.push_str("</strong>");
            }
            InlineNode::Emphasis(children) => {
                out.push_str("<em>");
                for child in children {
                    self.render_inline(child, out);
                }
                out.push_str("</em>");
            }
            InlineNode::Highlight(text) => {
                out.push_str("<span class=\"highlight\">");
                self.push_text(text, out);
                out.push_str("</span>");
            }
        }
    }

    fn push_text(&self, text: &str, out: &mut String) {
        if !self.options.escape_text {
            out.push_str(text);
            return;
        }
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                other => out.push(other),
            }
        }
    }
}

impl Runnable<Vec<Block>, String> for HtmlRenderer {
    fn run(&self, input: Vec<Block>) -> Result<String, TransformError> {
        Ok(self.render(&input))
    }
}

//! Keyword highlighting over parsed inline nodes
//!
//! Only [`InlineNode::Plain`] runs are searched, at any nesting depth, so a highlight
//! can land inside a strong span but can never straddle one of its boundaries.

use super::nodes::{InlineContent, InlineNode};
use regex::{Regex, RegexBuilder};

/// Upper bound on the compiled matcher, in bytes.
const VOCABULARY_SIZE_LIMIT: usize = 1 << 20;

/// Wraps vocabulary words in [`InlineNode::Highlight`].
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// `None` when the vocabulary is empty.
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Compile a whole-word, case-insensitive matcher for `words`.
    ///
    /// Longer words are tried first so a word that is a prefix of another never
    /// shadows it. Blank entries are ignored. Fails when the compiled matcher
    /// would exceed its size limit.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, regex::Error> {
        let mut words: Vec<&str> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .size_limit(VOCABULARY_SIZE_LIMIT)
            .build()?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn highlight(&self, nodes: InlineContent) -> InlineContent {
        let Some(pattern) = &self.pattern else {
            return nodes;
        };
        highlight_nodes(pattern, nodes)
    }
}

fn highlight_nodes(pattern: &Regex, nodes: InlineContent) -> InlineContent {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            InlineNode::Plain(text) => split_plain(pattern, &text, &mut out),
            InlineNode::Strong(children) => {
                out.push(InlineNode::Strong(highlight_nodes(pattern, children)))
            }
            InlineNode::Emphasis(children) => {
                out.push(InlineNode::Emphasis(highlight_nodes(pattern, children)))
            }
            highlight @ InlineNode::Highlight(_) => out.push(highlight),
        }
    }
    out
}

fn split_plain(pattern: &Regex, text: &str, out: &mut InlineContent) {
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            out.push(InlineNode::Plain(text[last..found.start()].to_string()));
        }
        out.push(InlineNode::Highlight(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() {
        out.push(InlineNode::Plain(text[last..].to_string()));
    }
}

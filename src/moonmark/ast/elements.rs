//! Node and block types
//!
//! A [`Node`] is what the line-level stages see: either a line nobody has claimed yet, a
//! single list item waiting to be merged, or a finished [`Block`].

use super::text_content::TextContent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logical line or finished block in the structural pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A logical line no stage has claimed yet. Blank lines stay here until the
    /// paragraph stage discards them.
    Unclaimed(String),
    /// A bullet line, before contiguous runs are merged into a list container.
    ListItem(ListItem),
    /// A fully typed block.
    Block(Block),
}

impl Node {
    pub fn is_unclaimed(&self) -> bool {
        matches!(self, Node::Unclaimed(_))
    }

    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Unclaimed(_) => "unclaimed line",
            Node::ListItem(_) => "list item",
            Node::Block(block) => block.kind(),
        }
    }
}

/// A maximal structural unit of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    SectionHeader(SectionHeader),
    SubsectionHeader(SubsectionHeader),
    List(ListContainer),
    Paragraph(Paragraph),
    Quote(Quote),
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::SectionHeader(_) => "section header",
            Block::SubsectionHeader(_) => "subsection header",
            Block::List(_) => "list",
            Block::Paragraph(_) => "paragraph",
            Block::Quote(_) => "quote",
        }
    }

    /// Every text payload carried by this block, in document order.
    pub fn texts_mut(&mut self) -> Vec<&mut TextContent> {
        match self {
            Block::SectionHeader(header) => vec![&mut header.title],
            Block::SubsectionHeader(header) => vec![&mut header.title],
            Block::List(list) => list.items.iter_mut().map(|item| &mut item.text).collect(),
            Block::Paragraph(paragraph) => vec![&mut paragraph.text],
            Block::Quote(quote) => vec![&mut quote.text],
        }
    }
}

/// `N. title`, decorated with an icon chosen from the title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeader {
    pub number: String,
    pub title: TextContent,
    pub icon: String,
}

/// `N.M title`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsectionHeader {
    /// Both levels, e.g. `"1.2"`.
    pub number: String,
    pub title: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListContainer {
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub text: TextContent,
    pub class_tag: Option<ClassificationTag>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: TextContent::from_string(text),
            class_tag: None,
        }
    }

    /// Set the tag only if no group has claimed this item yet.
    ///
    /// Returns `true` when the tag was applied.
    pub fn classify(&mut self, tag: ClassificationTag) -> bool {
        if self.class_tag.is_some() {
            return false;
        }
        self.class_tag = Some(tag);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Text between the quotation marks.
    pub text: TextContent,
}

/// Semantic label for a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationTag {
    Importance,
    Caution,
    Success,
    Romance,
    Career,
    Finance,
    Health,
    Family,
    Travel,
}

impl ClassificationTag {
    /// Groups are tried in this order; the first group to match an item wins.
    pub const PRIORITY: [ClassificationTag; 9] = [
        ClassificationTag::Importance,
        ClassificationTag::Caution,
        ClassificationTag::Success,
        ClassificationTag::Romance,
        ClassificationTag::Career,
        ClassificationTag::Finance,
        ClassificationTag::Health,
        ClassificationTag::Family,
        ClassificationTag::Travel,
    ];

    /// Value of the `class` attribute on the rendered `<li>`.
    pub fn css_class(self) -> &'static str {
        match self {
            ClassificationTag::Importance => "important",
            ClassificationTag::Caution => "warning",
            ClassificationTag::Success => "success",
            ClassificationTag::Romance => "love",
            ClassificationTag::Career => "career",
            ClassificationTag::Finance => "money",
            ClassificationTag::Health => "health",
            ClassificationTag::Family => "family",
            ClassificationTag::Travel => "travel",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClassificationTag::Importance => "importance",
            ClassificationTag::Caution => "caution",
            ClassificationTag::Success => "success",
            ClassificationTag::Romance => "romance",
            ClassificationTag::Career => "career",
            ClassificationTag::Finance => "finance",
            ClassificationTag::Health => "health",
            ClassificationTag::Family => "family",
            ClassificationTag::Travel => "travel",
        }
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_only_sets_once() {
        let mut item = ListItem::new("Đây là điều quan trọng");
        assert!(item.classify(ClassificationTag::Importance));
        assert!(!item.classify(ClassificationTag::Romance));
        assert_eq!(item.class_tag, Some(ClassificationTag::Importance));
    }

    #[test]
    fn priority_lists_every_tag_once() {
        let mut seen = std::collections::HashSet::new();
        for tag in ClassificationTag::PRIORITY {
            assert!(seen.insert(tag), "{} listed twice", tag);
        }
        assert_eq!(seen.len(), 9);
        assert_eq!(ClassificationTag::PRIORITY[0], ClassificationTag::Importance);
        assert_eq!(ClassificationTag::PRIORITY[8], ClassificationTag::Travel);
    }

    #[test]
    fn css_classes_match_stylesheet_names() {
        assert_eq!(ClassificationTag::Caution.css_class(), "warning");
        assert_eq!(ClassificationTag::Romance.css_class(), "love");
        assert_eq!(ClassificationTag::Finance.css_class(), "money");
    }
}

//! Fluent assertions over formatted blocks
//!
//! ```rust,ignore
//! assert_blocks(&blocks)
//!     .count(2)
//!     .block(0, |b| {
//!         b.section().number("1").icon("💫").title("Thông điệp từ vũ trụ");
//!     })
//!     .block(1, |b| {
//!         b.list().item_count(1).item(0, |item| {
//!             item.text_contains("quan trọng").class(Some(ClassificationTag::Importance));
//!         });
//!     });
//! ```
//!
//! Text checks use the visible text (emphasis delimiters that formed spans removed).

use super::matchers::TextMatch;
use crate::moonmark::ast::{Block, ClassificationTag, ListContainer, ListItem, TextContent};

pub fn assert_blocks(blocks: &[Block]) -> BlocksAssertion<'_> {
    BlocksAssertion {
        blocks,
        context: "blocks".to_string(),
    }
}

pub struct BlocksAssertion<'a> {
    blocks: &'a [Block],
    context: String,
}

impl<'a> BlocksAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let kinds: Vec<_> = self.blocks.iter().map(Block::kind).collect();
        assert_eq!(
            self.blocks.len(),
            expected,
            "{}: Expected {} blocks, found {}: {:?}",
            self.context,
            expected,
            self.blocks.len(),
            kinds
        );
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.blocks.len(),
            "{}: Block index {} out of bounds ({} blocks)",
            self.context,
            index,
            self.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.blocks[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.kind()
        )
    }

    pub fn section(self) -> SectionAssertion<'a> {
        match self.block {
            Block::SectionHeader(header) => SectionAssertion {
                number: &header.number,
                icon: &header.icon,
                title: &header.title,
                context: self.context,
            },
            _ => self.wrong_kind("section header"),
        }
    }

    pub fn subsection(self) -> SectionAssertion<'a> {
        match self.block {
            Block::SubsectionHeader(header) => SectionAssertion {
                number: &header.number,
                icon: "",
                title: &header.title,
                context: self.context,
            },
            _ => self.wrong_kind("subsection header"),
        }
    }

    pub fn list(self) -> ListAssertion<'a> {
        match self.block {
            Block::List(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.wrong_kind("list"),
        }
    }

    pub fn paragraph(self, expected: &str) {
        match self.block {
            Block::Paragraph(p) => {
                TextMatch::Exact(expected.to_string()).assert(&p.text.plain_text(), &self.context)
            }
            _ => self.wrong_kind("paragraph"),
        }
    }

    pub fn quote(self, expected: &str) {
        match self.block {
            Block::Quote(q) => {
                TextMatch::Exact(expected.to_string()).assert(&q.text.plain_text(), &self.context)
            }
            _ => self.wrong_kind("quote"),
        }
    }
}

/// Shared by section and subsection headers; subsections have no icon.
pub struct SectionAssertion<'a> {
    number: &'a str,
    icon: &'a str,
    title: &'a TextContent,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn number(self, expected: &str) -> Self {
        assert_eq!(self.number, expected, "{}: number", self.context);
        self
    }

    pub fn icon(self, expected: &str) -> Self {
        assert_eq!(self.icon, expected, "{}: icon", self.context);
        self
    }

    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.title.plain_text(), &self.context);
        self
    }
}

pub struct ListAssertion<'a> {
    list: &'a ListContainer,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.list.items.len(),
            expected,
            "{}: Expected {} list items, found {}",
            self.context,
            expected,
            self.list.items.len()
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: Item index {} out of bounds (list has {} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }

    /// Class tags of all items, in order.
    pub fn classes(self, expected: &[Option<ClassificationTag>]) -> Self {
        let actual: Vec<_> = self.list.items.iter().map(|i| i.class_tag).collect();
        assert_eq!(actual, expected, "{}: classes", self.context);
        self
    }
}

pub struct ListItemAssertion<'a> {
    item: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.item.text.plain_text(), &self.context);
        self
    }

    pub fn text_contains(self, expected: &str) -> Self {
        TextMatch::Contains(expected.to_string())
            .assert(&self.item.text.plain_text(), &self.context);
        self
    }

    pub fn class(self, expected: Option<ClassificationTag>) -> Self {
        assert_eq!(self.item.class_tag, expected, "{}: class", self.context);
        self
    }
}

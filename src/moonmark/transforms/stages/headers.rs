//! Section and subsection header stages

use super::claim_lines;
use crate::moonmark::ast::{Block, Node, SectionHeader, SubsectionHeader, TextContent};
use crate::moonmark::tables::IconTable;
use crate::moonmark::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::Regex;

/// `N. title`; the title must contain something other than whitespace.
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(\S.*)$").expect("section header pattern"));

/// `N.M title`
static SUBSECTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+\.[0-9]+)\s+(\S.*)$").expect("subsection header pattern")
});

/// Claims `N. title` lines as section headers and picks their icon.
pub struct SectionHeaders {
    icons: IconTable,
}

impl SectionHeaders {
    pub fn new(icons: IconTable) -> Self {
        Self { icons }
    }

    fn claim(&self, line: &str) -> Option<Node> {
        let caps = SECTION_HEADER.captures(line)?;
        let title = &caps[2];
        let icon = self.icons.icon_for(title);
        tracing::trace!(title, icon, "section header icon");
        Some(Node::Block(Block::SectionHeader(SectionHeader {
            number: caps[1].to_string(),
            title: TextContent::from_string(title),
            icon: icon.to_string(),
        })))
    }
}

impl Runnable<Vec<Node>, Vec<Node>> for SectionHeaders {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        Ok(claim_lines(input, |line| self.claim(line)))
    }
}

/// Claims `N.M title` lines as subsection headers.
pub struct SubsectionHeaders;

impl Runnable<Vec<Node>, Vec<Node>> for SubsectionHeaders {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        Ok(claim_lines(input, |line| {
            let caps = SUBSECTION_HEADER.captures(line)?;
            Some(Node::Block(Block::SubsectionHeader(SubsectionHeader {
                number: caps[1].to_string(),
                title: TextContent::from_string(&caps[2]),
            })))
        }))
    }
}

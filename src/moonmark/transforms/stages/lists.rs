//! List detection and merging
//!
//! Bullet lines are recognised per glyph family, then every maximal run of consecutive
//! list items is merged into one [`ListContainer`].

use super::claim_lines;
use crate::moonmark::ast::{Block, ListContainer, ListItem, Node};
use crate::moonmark::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::Regex;

static DASH_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•*]\s+(\S.*)$").expect("dash bullet pattern"));

static SQUARE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[▪▫▬▭▮▯]\s+(\S.*)$").expect("square bullet pattern"));

static GEOMETRIC_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[◆◇◈◉◊○●◐◑◒◓◔◕◖◗◘◙◚◛◜◝◞◟◠◡◢◣◤◥◦◧◨◩◪◫◬◭◮◯]\s+(\S.*)$")
        .expect("geometric bullet pattern")
});

/// The three disjoint sets of leading glyphs that mark a bullet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletFamily {
    /// `-`, `•`, `*`
    Dash,
    /// `▪ ▫ ▬ ▭ ▮ ▯`
    Square,
    /// `◆ ◇ ○ ● ◦ …`
    Geometric,
}

impl BulletFamily {
    pub const ALL: [BulletFamily; 3] = [
        BulletFamily::Dash,
        BulletFamily::Square,
        BulletFamily::Geometric,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            BulletFamily::Dash => &DASH_BULLET,
            BulletFamily::Square => &SQUARE_BULLET,
            BulletFamily::Geometric => &GEOMETRIC_BULLET,
        }
    }

    /// Item body of `line` if it is a bullet line of this family.
    pub fn item_body(self, line: &str) -> Option<&str> {
        self.pattern()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|body| body.as_str())
    }
}

/// Claims bullet lines of every family as [`Node::ListItem`]s.
///
/// A glyph with nothing after it is left unclaimed and ends up as a paragraph.
pub struct ListItems;

impl Runnable<Vec<Node>, Vec<Node>> for ListItems {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        let mut nodes = input;
        for family in BulletFamily::ALL {
            nodes = claim_lines(nodes, |line| {
                family
                    .item_body(line)
                    .map(|body| Node::ListItem(ListItem::new(body)))
            });
        }
        Ok(nodes)
    }
}

/// Merges each maximal run of [`Node::ListItem`]s into a single list block.
///
/// Any other node, blank lines included, ends the run.
pub struct MergeLists;

impl Runnable<Vec<Node>, Vec<Node>> for MergeLists {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        let mut output = Vec::with_capacity(input.len());
        let mut run: Vec<ListItem> = Vec::new();
        let mut lists = 0usize;

        for node in input {
            match node {
                Node::ListItem(item) => run.push(item),
                other => {
                    if !run.is_empty() {
                        output.push(list_block(std::mem::take(&mut run)));
                        lists += 1;
                    }
                    output.push(other);
                }
            }
        }
        if !run.is_empty() {
            output.push(list_block(run));
            lists += 1;
        }

        tracing::debug!(lists, "merged list items");
        Ok(output)
    }
}

fn list_block(items: Vec<ListItem>) -> Node {
    Node::Block(Block::List(ListContainer { items }))
}

//! Individual transformation stages
//!
//! Line-level stages (`Vec<Node> -> Vec<Node>`) run in this order:
//! segmentation, section headers, subsection headers, list items, list merging, quotes,
//! paragraphs. [`CollectBlocks`] then turns the claimed nodes into blocks, and the
//! block-level stages (`Vec<Block> -> Vec<Block>`) refine text payloads: inline parsing,
//! highlighting, classification.

pub mod assembly;
pub mod classification;
pub mod headers;
pub mod highlighting;
pub mod inline_parsing;
pub mod lists;
pub mod paragraphs;
pub mod quotes;
pub mod segmentation;

pub use assembly::CollectBlocks;
pub use classification::Classify;
pub use headers::{SectionHeaders, SubsectionHeaders};
pub use highlighting::HighlightKeywords;
pub use inline_parsing::ParseInlines;
pub use lists::{BulletFamily, ListItems, MergeLists};
pub use paragraphs::Paragraphs;
pub use quotes::Quotes;
pub use segmentation::Segmentation;

use crate::moonmark::ast::Node;

/// Offer every unclaimed line to `claim`; lines it returns `None` for stay unclaimed.
///
/// Nodes already claimed by an earlier stage are passed through untouched.
pub(crate) fn claim_lines<F>(nodes: Vec<Node>, mut claim: F) -> Vec<Node>
where
    F: FnMut(&str) -> Option<Node>,
{
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Unclaimed(line) => claim(&line).unwrap_or(Node::Unclaimed(line)),
            other => other,
        })
        .collect()
}

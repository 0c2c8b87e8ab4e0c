//! Typed representation shared by all pipeline stages
//!
//! Stages never rescan markup. The structural stages work on a flat sequence of
//! [`Node`]s, claiming lines by replacing `Node::Unclaimed` with a typed variant. Once
//! every line is claimed the sequence is collected into [`Block`]s, which the inline,
//! highlighting and classification stages refine in place.

pub mod elements;
pub mod text_content;

pub use elements::{
    Block, ClassificationTag, ListContainer, ListItem, Node, Paragraph, Quote, SectionHeader,
    SubsectionHeader,
};
pub use text_content::TextContent;

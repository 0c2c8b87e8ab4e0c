//! Paragraph wrapping
//!
//! Last of the line-level stages: every line still unclaimed becomes a paragraph, and
//! blank ones are dropped.

use crate::moonmark::ast::{Block, Node, Paragraph, TextContent};
use crate::moonmark::transforms::{Runnable, TransformError};

pub struct Paragraphs;

impl Runnable<Vec<Node>, Vec<Node>> for Paragraphs {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        let mut dropped = 0usize;
        let output: Vec<Node> = input
            .into_iter()
            .filter_map(|node| match node {
                Node::Unclaimed(line) if line.trim().is_empty() => {
                    dropped += 1;
                    None
                }
                Node::Unclaimed(line) => Some(Node::Block(Block::Paragraph(Paragraph {
                    text: TextContent::from_string(line),
                }))),
                other => Some(other),
            })
            .collect();
        tracing::debug!(blank_lines = dropped, "wrapped paragraphs");
        Ok(output)
    }
}

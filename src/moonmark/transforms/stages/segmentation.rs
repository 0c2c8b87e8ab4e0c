//! Segmentation stage
//!
//! Splits the raw narrative into logical lines.

use crate::moonmark::ast::Node;
use crate::moonmark::transforms::{Runnable, TransformError};

/// `String -> Vec<Node>`: one [`Node::Unclaimed`] per logical line.
///
/// Lines are split on `\n` and a trailing `\r` is dropped. Blank lines are kept so they
/// can break list runs; empty input gives no nodes at all.
pub struct Segmentation;

impl Runnable<String, Vec<Node>> for Segmentation {
    fn run(&self, input: String) -> Result<Vec<Node>, TransformError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let nodes: Vec<Node> = input
            .split('\n')
            .map(|line| Node::Unclaimed(line.strip_suffix('\r').unwrap_or(line).to_string()))
            .collect();
        tracing::debug!(lines = nodes.len(), "segmented narrative");
        Ok(nodes)
    }
}

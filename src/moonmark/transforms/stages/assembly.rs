//! Block collection
//!
//! Boundary between the line-level and block-level stages. Every node must be a finished
//! block by now; anything else means an earlier stage broke its contract.

use crate::moonmark::ast::{Block, Node};
use crate::moonmark::transforms::{Runnable, TransformError};

pub struct CollectBlocks;

impl Runnable<Vec<Node>, Vec<Block>> for CollectBlocks {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Block>, TransformError> {
        let blocks = input
            .into_iter()
            .enumerate()
            .map(|(index, node)| match node {
                Node::Block(block) => Ok(block),
                other => Err(TransformError::StageFailed {
                    stage: "assembly".to_string(),
                    message: format!("{} left at position {}", other.kind(), index),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(blocks = blocks.len(), "collected blocks");
        Ok(blocks)
    }
}

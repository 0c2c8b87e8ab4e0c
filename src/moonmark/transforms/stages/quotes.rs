//! Quote detection
//!
//! Runs before paragraph wrapping so a standalone quoted line becomes a quote block.

use super::claim_lines;
use crate::moonmark::ast::{Block, Node, Quote, TextContent};
use crate::moonmark::transforms::{Runnable, TransformError};

/// Opening and closing marks that count as a matching pair.
const QUOTE_PAIRS: [(char, char); 2] = [('"', '"'), ('“', '”')];

/// Claims lines wrapped entirely in a matching pair of quotation marks.
///
/// Whitespace around the marks is tolerated; the quoted text must not be blank.
pub struct Quotes;

impl Runnable<Vec<Node>, Vec<Node>> for Quotes {
    fn run(&self, input: Vec<Node>) -> Result<Vec<Node>, TransformError> {
        Ok(claim_lines(input, |line| {
            quoted_body(line).map(|body| {
                Node::Block(Block::Quote(Quote {
                    text: TextContent::from_string(body),
                }))
            })
        }))
    }
}

/// Text between the quotation marks if `line` is a standalone quote.
pub fn quoted_body(line: &str) -> Option<&str> {
    let line = line.trim();
    QUOTE_PAIRS.iter().find_map(|&(open, close)| {
        let body = line.strip_prefix(open)?.strip_suffix(close)?;
        (!body.trim().is_empty()).then_some(body)
    })
}

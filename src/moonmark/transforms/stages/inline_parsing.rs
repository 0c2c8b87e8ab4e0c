use crate::moonmark::ast::Block;
use crate::moonmark::transforms::{Runnable, TransformError};

/// Parses `**strong**` / `*emphasis*` in every text payload.
///
/// Runs after block typing is fixed, so it never changes which block a line belongs to.
pub struct ParseInlines;

impl Runnable<Vec<Block>, Vec<Block>> for ParseInlines {
    fn run(&self, mut input: Vec<Block>) -> Result<Vec<Block>, TransformError> {
        for block in input.iter_mut() {
            for text in block.texts_mut() {
                text.ensure_inline_parsed();
            }
        }
        Ok(input)
    }
}

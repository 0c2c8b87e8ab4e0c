use crate::moonmark::ast::Block;
use crate::moonmark::inlines::Highlighter;
use crate::moonmark::transforms::{Runnable, TransformError};

/// Wraps vocabulary words in highlight spans in every text payload.
pub struct HighlightKeywords {
    highlighter: Highlighter,
}

impl HighlightKeywords {
    pub fn new(highlighter: Highlighter) -> Self {
        Self { highlighter }
    }
}

impl Runnable<Vec<Block>, Vec<Block>> for HighlightKeywords {
    fn run(&self, mut input: Vec<Block>) -> Result<Vec<Block>, TransformError> {
        if self.highlighter.is_empty() {
            return Ok(input);
        }
        for block in input.iter_mut() {
            for text in block.texts_mut() {
                text.map_inlines(|nodes| self.highlighter.highlight(nodes));
            }
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moonmark::ast::{SectionHeader, TextContent};
    use crate::moonmark::inlines::InlineNode;

    #[test]
    fn highlights_header_titles() {
        let blocks = vec![Block::SectionHeader(SectionHeader {
            number: "1".into(),
            title: TextContent::from_string("Năng lượng của mặt trăng"),
            icon: "🌟".into(),
        })];
        let stage = HighlightKeywords::new(Highlighter::new(&["mặt trăng", "năng lượng"]).unwrap());
        let blocks = stage.run(blocks).unwrap();
        let Block::SectionHeader(header) = &blocks[0] else {
            panic!("Expected section header");
        };
        assert_eq!(
            header.title.inline_nodes().unwrap(),
            &[
                InlineNode::Highlight("Năng lượng".into()),
                InlineNode::Plain(" của ".into()),
                InlineNode::Highlight("mặt trăng".into()),
            ]
        );
    }
}

//! Semantic classification of list items
//!
//! Groups are applied in [`ClassificationTag::PRIORITY`] order. Within a group each
//! keyword is checked against every list item that has no tag yet; the first hit sets the
//! tag and later groups never see that item again. This yields at most one tag per item,
//! decided by group priority rather than keyword position in the text.

use crate::moonmark::ast::{Block, ClassificationTag, ListItem};
use crate::moonmark::tables::ClassificationTables;
use crate::moonmark::transforms::{Runnable, TransformError};

pub struct Classify {
    /// Lowercased, non-blank keywords per group, in priority order.
    groups: Vec<(ClassificationTag, Vec<String>)>,
}

impl Classify {
    pub fn new(tables: &ClassificationTables) -> Self {
        let groups = tables
            .groups()
            .map(|(tag, keywords)| {
                let keywords = keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (tag, keywords)
            })
            .collect();
        Self { groups }
    }
}

impl Runnable<Vec<Block>, Vec<Block>> for Classify {
    fn run(&self, mut input: Vec<Block>) -> Result<Vec<Block>, TransformError> {
        let (count, tagged) = self.tag_items(&mut input);
        tracing::debug!(items = count, tagged, "classified list items");
        Ok(input)
    }
}

impl Classify {
    /// Returns how many list items were seen and how many got a tag.
    fn tag_items(&self, blocks: &mut [Block]) -> (usize, usize) {
        // Matching text is computed once per item: visible text, lowercased.
        let mut items: Vec<(&mut ListItem, String)> = blocks
            .iter_mut()
            .filter_map(|block| match block {
                Block::List(list) => Some(list.items.iter_mut()),
                _ => None,
            })
            .flatten()
            .map(|item| {
                let haystack = item.text.plain_text().to_lowercase();
                (item, haystack)
            })
            .collect();

        let mut tagged = 0usize;
        for (tag, keywords) in &self.groups {
            for keyword in keywords {
                for (item, haystack) in items.iter_mut() {
                    if item.class_tag.is_none() && haystack.contains(keyword.as_str()) {
                        item.classify(*tag);
                        tagged += 1;
                        tracing::trace!(%tag, keyword = keyword.as_str(), "classified list item");
                    }
                }
            }
        }
        (items.len(), tagged)
    }
}

//! Standard transform definitions
//!
//! Table-free chains are pre-built statics using `once_cell::sync::Lazy`; chains that
//! depend on configuration tables are assembled by the functions below.

use crate::moonmark::ast::{Block, Node};
use crate::moonmark::formats::{HtmlRenderer, RenderOptions};
use crate::moonmark::inlines::Highlighter;
use crate::moonmark::tables::{FormatterTables, IconTable};
use crate::moonmark::transforms::stages::{
    Classify, CollectBlocks, HighlightKeywords, ListItems, MergeLists, ParseInlines, Paragraphs,
    Quotes, SectionHeaders, Segmentation, SubsectionHeaders,
};
use crate::moonmark::transforms::Transform;
use once_cell::sync::Lazy;

/// Transform over the line-level node sequence.
pub type NodeTransform = Transform<Vec<Node>, Vec<Node>>;

/// Transform from raw narrative to typed blocks.
pub type BlockTransform = Transform<String, Vec<Block>>;

/// Transform from raw narrative to the markup fragment.
pub type MarkupTransform = Transform<String, String>;

/// List detection: bullet lines of every glyph family, then run merging.
pub static LIST_DETECTION: Lazy<NodeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(ListItems)
        .then(MergeLists)
});

/// Quote claiming followed by paragraph wrapping of whatever is left.
pub static LINE_WRAPPING: Lazy<NodeTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Quotes).then(Paragraphs));

/// Structure only: raw narrative to blocks, with no inline parsing yet.
///
/// 1. Segmentation into logical lines
/// 2. Section headers (icon from `icons`)
/// 3. Subsection headers
/// 4. List detection
/// 5. Quotes and paragraphs
/// 6. Collection into blocks
pub fn structure(icons: IconTable) -> BlockTransform {
    Transform::from_fn(Ok)
        .then(Segmentation)
        .then(SectionHeaders::new(icons))
        .then(SubsectionHeaders)
        .then_transform(&LIST_DETECTION)
        .then_transform(&LINE_WRAPPING)
        .then(CollectBlocks)
}

/// The full block pipeline: [`structure`] followed by inline parsing, highlighting and
/// classification.
///
/// Fails only when the highlight vocabulary cannot be compiled.
pub fn narrative_to_blocks(tables: &FormatterTables) -> Result<BlockTransform, regex::Error> {
    let highlighter = Highlighter::new(&tables.highlight.words)?;
    Ok(structure(tables.icons.clone())
        .then(ParseInlines)
        .then(HighlightKeywords::new(highlighter))
        .then(Classify::new(&tables.classification)))
}

/// [`narrative_to_blocks`] with the HTML renderer as final stage.
pub fn narrative_to_markup(
    tables: &FormatterTables,
    options: RenderOptions,
) -> Result<MarkupTransform, regex::Error> {
    Ok(narrative_to_blocks(tables)?.then(HtmlRenderer::new(options)))
}

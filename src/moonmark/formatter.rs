//! Formatter facade
//!
//! [`NarrativeFormatter`] owns the configured pipeline. Build it once from the tables and
//! share it; every call works on its own copy of the input.

use crate::moonmark::ast::Block;
use crate::moonmark::error::FormatError;
use crate::moonmark::formats::RenderOptions;
use crate::moonmark::tables::FormatterTables;
use crate::moonmark::transforms::standard::{
    narrative_to_blocks, narrative_to_markup, BlockTransform, MarkupTransform,
};

pub struct NarrativeFormatter {
    blocks: BlockTransform,
    markup: MarkupTransform,
    options: RenderOptions,
}

impl NarrativeFormatter {
    /// Build a formatter with default render options.
    pub fn new(tables: &FormatterTables) -> Result<Self, FormatError> {
        Self::with_options(tables, RenderOptions::default())
    }

    pub fn with_options(
        tables: &FormatterTables,
        options: RenderOptions,
    ) -> Result<Self, FormatError> {
        Ok(Self::from_transforms(
            narrative_to_blocks(tables)?,
            narrative_to_markup(tables, options)?,
            options,
        ))
    }

    pub(crate) fn from_transforms(
        blocks: BlockTransform,
        markup: MarkupTransform,
        options: RenderOptions,
    ) -> Self {
        Self {
            blocks,
            markup,
            options,
        }
    }

    /// Run every stage and return the typed blocks, before rendering.
    pub fn blocks(&self, raw: &str) -> Result<Vec<Block>, FormatError> {
        Ok(self.blocks.run(raw.to_string())?)
    }

    /// Format a narrative into a markup fragment. Empty input gives an empty string.
    pub fn format(&self, raw: &str) -> Result<String, FormatError> {
        Ok(self.markup.run(raw.to_string())?)
    }

    /// Like [`format`](Self::format), but falls back to the untransformed text on error.
    pub fn format_or_raw(&self, raw: &str) -> String {
        match self.format(raw) {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(error = %err, "formatting failed, showing raw narrative");
                raw.to_string()
            }
        }
    }
}

impl std::fmt::Debug for NarrativeFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeFormatter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// One-shot helper: build a formatter for `tables` and format `raw`.
pub fn format(raw: &str, tables: &FormatterTables) -> Result<String, FormatError> {
    NarrativeFormatter::new(tables)?.format(raw)
}

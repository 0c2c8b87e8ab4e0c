//! # moonmark
//!
//! Annotation engine for tarot reading narratives.
//!
//! A reading arrives as one block of free text from the text generation service. moonmark
//! runs it through a fixed, ordered list of stages (headers, lists, paragraphs, inline
//! emphasis, highlights, classification) and returns a markup fragment ready for display.
//!
//! File Layout
//!
//! src/moonmark
//!   ├── ast          Typed nodes and blocks the stages pass along
//!   ├── inlines      Emphasis tokenizer/parser and keyword highlighting
//!   ├── transforms   The `Runnable` stages and the standard pipeline
//!   ├── formats      Markup and JSON output
//!   └── testing      Sample readings, fixture tables and block assertions
//!
//! For the common case use [`NarrativeFormatter`](moonmark::formatter::NarrativeFormatter).

#![allow(rustdoc::invalid_html_tags)]

pub mod moonmark;

pub use moonmark::error::FormatError;
pub use moonmark::formatter::{format, NarrativeFormatter};
pub use moonmark::tables::FormatterTables;

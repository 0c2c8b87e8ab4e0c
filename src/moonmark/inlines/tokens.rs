//! Tokenizer for emphasis delimiters
//!
//! Splits a text payload into `**`, `*` and runs of everything else. Longest match
//! means `***` lexes as `**` followed by `*`.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken {
    #[token("**")]
    StrongMarker,
    #[token("*")]
    EmphasisMarker,
    #[regex(r"[^*]+")]
    Text,
}

/// Tokenize `text` into tokens with their byte ranges.
///
/// The patterns cover every input, so lexer errors cannot occur; should one appear
/// anyway the slice is kept as text.
pub fn tokenize(text: &str) -> Vec<(InlineToken, Range<usize>)> {
    let mut lexer = InlineToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(InlineToken::Text);
        tokens.push((token, lexer.span()));
    }
    tokens
}

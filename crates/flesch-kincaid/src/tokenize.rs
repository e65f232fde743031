//! Turning annotated text into an ordered list of countable words.
//!
//! All entry points are pure: they read their input, never mutate it, and
//! return words in input order without sorting or deduplication. Empty input
//! gives empty output.

use crate::annotate::{Annotator, Sentence};
use crate::syntax::SyntaxToken;
use crate::validate::{PennTreebankValidator, UniversalValidator, WordValidator};

/// Segment `text` into tagged sentences using `annotator`.
///
/// Blank text short-circuits to no sentences without calling the annotator.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment_to_sentences<A: Annotator + ?Sized>(annotator: &A, text: &str) -> Vec<Sentence> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    annotator.annotate(text)
}

/// Words of `sentences`, flattened across sentence boundaries, filtered by
/// [`PennTreebankValidator`].
pub fn extract_words(sentences: &[Sentence]) -> Vec<&str> {
    sentences
        .iter()
        .flat_map(|sentence| &sentence.tokens)
        .filter(|token| PennTreebankValidator.is_word(token))
        .map(|token| token.text.as_str())
        .collect()
}

/// Words of a flat cloud token list, filtered by [`UniversalValidator`].
pub fn extract_syntax_words(tokens: &[SyntaxToken]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|token| UniversalValidator.is_word(token))
        .map(|token| token.text.as_str())
        .collect()
}

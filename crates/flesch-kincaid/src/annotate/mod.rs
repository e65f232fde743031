//! Annotator contract: sentence segmentation and part-of-speech tagging.
//!
//! Readability scoring consumes tagged sentences but does not own the
//! linguistics that produce them. Any segmenter/tagger can be plugged in by
//! implementing [`Annotator`]. With the `nlprule` feature enabled,
//! `NlpAnnotator` wraps an nlprule tokenizer, which segments and tags
//! English with LanguageTool's Penn-style tag set.

#[cfg(feature = "nlprule")]
mod nlp;

#[cfg(feature = "nlprule")]
pub use nlp::NlpAnnotator;

/// A token produced by a local (Penn Treebank) tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface text exactly as it appeared in the input.
    pub text: String,
    /// Raw tag string, if the tagger assigned one.
    pub pos_tag: Option<String>,
}

impl TaggedToken {
    /// Create a token with a tag.
    pub fn new(text: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos_tag: Some(pos_tag.into()),
        }
    }

    /// Create a token the tagger left untagged.
    pub fn untagged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos_tag: None,
        }
    }
}

/// One sentence: its surface text and its tokens in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Original text of the sentence.
    pub text: String,
    /// Tokens in reading order.
    pub tokens: Vec<TaggedToken>,
}

impl Sentence {
    /// Create a sentence from its text and tokens.
    pub fn new(text: impl Into<String>, tokens: Vec<TaggedToken>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }
}

/// Segments text into tagged sentences.
///
/// Implementations must be deterministic: annotating the same text twice
/// yields the same sentences in the same order. An empty result is valid
/// and is treated like empty input.
pub trait Annotator {
    /// Segment and tag `text`.
    fn annotate(&self, text: &str) -> Vec<Sentence>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        (**self).annotate(text)
    }
}

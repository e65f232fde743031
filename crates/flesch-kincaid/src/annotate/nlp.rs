//! [`Annotator`] backed by an nlprule tokenizer.
//!
//! Tokenizer binaries are distributed with nlprule's GitHub releases
//! (`en_tokenizer.bin`). The path is usually configured through
//! [`Config::tokenizer_path`].

use std::fmt;

use camino::Utf8Path;
use nlprule::Tokenizer;

use super::{Annotator, Sentence, TaggedToken};
use crate::config::Config;
use crate::error::{AnalysisError, AnalysisResult};

/// Readings nlprule attaches to sentence edges rather than to words.
const PSEUDO_TAGS: &[&str] = &["SENT_START", "SENT_END"];

/// Tag for out-of-dictionary words, which nlprule leaves without a reading.
const UNTAGGED_WORD_TAG: &str = "NN";

/// Sentence segmentation and Penn-style tagging via nlprule.
pub struct NlpAnnotator {
    tokenizer: Tokenizer,
}

impl NlpAnnotator {
    /// Wrap an already loaded tokenizer.
    pub const fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Load a tokenizer binary from `path`.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref()))]
    pub fn from_path<P: AsRef<Utf8Path>>(path: P) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::new(path).map_err(|e| AnalysisError::Tokenizer {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("loaded nlprule tokenizer");
        Ok(Self::new(tokenizer))
    }

    /// Load the tokenizer named by [`Config::tokenizer_path`].
    pub fn from_config(config: &Config) -> AnalysisResult<Self> {
        let path = config
            .tokenizer_path
            .as_deref()
            .ok_or(AnalysisError::TokenizerNotConfigured)?;
        Self::from_path(path)
    }
}

impl fmt::Debug for NlpAnnotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpAnnotator").finish_non_exhaustive()
    }
}

impl Annotator for NlpAnnotator {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = self
            .tokenizer
            .pipe(text)
            .map(|sentence| {
                let tokens: Vec<TaggedToken> = sentence
                    .tokens()
                    .iter()
                    .filter_map(|token| {
                        let word = token.word();
                        let pos = word
                            .tags()
                            .iter()
                            .map(|data| data.pos().as_str())
                            .find(|pos| !pos.is_empty() && !PSEUDO_TAGS.contains(pos));
                        to_tagged(word.text().as_str(), pos)
                    })
                    .collect();
                Sentence::new(sentence.text().trim(), tokens)
            })
            .filter(|sentence| !sentence.tokens.is_empty())
            .collect();
        tracing::debug!(sentences = sentences.len(), "annotated text");
        sentences
    }
}

/// Convert one nlprule token. Whitespace tokens are dropped; words nlprule
/// could not tag get [`UNTAGGED_WORD_TAG`], punctuation stays untagged.
fn to_tagged(text: &str, pos: Option<&str>) -> Option<TaggedToken> {
    if text.trim().is_empty() {
        return None;
    }
    let token = match pos {
        Some(pos) => TaggedToken::new(text, pos),
        None if text.chars().any(char::is_alphanumeric) => {
            TaggedToken::new(text, UNTAGGED_WORD_TAG)
        }
        None => TaggedToken::untagged(text),
    };
    Some(token)
}

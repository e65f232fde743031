//! Flesch Reading Ease and Flesch-Kincaid Grade Level from tagged text.
//!
//! Scoring turns text into a list of countable words using part-of-speech
//! tags, then estimates syllables per word with a dictionary-free heuristic.
//!
//! Segmentation and tagging come from an [`Annotator`]: any tagger can be
//! plugged in, and the `nlprule` feature provides `NlpAnnotator`.
//!
//! # Modules
//!
//! - [`tags`] - Penn Treebank and universal tag taxonomies
//! - [`validate`] - Which tagged tokens count as words
//! - [`annotate`] - Annotator contract and backends
//! - [`syntax`] - Tokens from cloud syntax-analysis services
//! - [`segment`] - Sentence splitting for flat cloud token lists
//! - [`tokenize`] - Sentences and tokens to ordered word lists
//! - [`syllables`] - Syllable estimation
//! - [`readability`] - The two formulas, counts and reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use flesch_kincaid::{Sentence, TaggedToken, grade_level_of_sentences, reading_ease_of_sentences};
//!
//! let tagged = [
//!     ("The", "DT"), ("quick", "JJ"), ("brown", "JJ"), ("fox", "NN"), ("jumps", "VBZ"),
//!     ("over", "IN"), ("the", "DT"), ("lazy", "JJ"), ("dog", "NN"), (".", "."),
//! ];
//! let sentence = Sentence::new(
//!     "The quick brown fox jumps over the lazy dog.",
//!     tagged.iter().map(|&(word, tag)| TaggedToken::new(word, tag)).collect(),
//! );
//!
//! let ease = reading_ease_of_sentences(&[sentence.clone()]);
//! let grade = grade_level_of_sentences(&[sentence]);
//! assert!(ease > grade);
//!
//! assert!(reading_ease_of_sentences(&[]).is_nan());
//! ```
#![deny(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod error;
pub mod readability;
pub mod segment;
pub mod syllables;
pub mod syntax;
pub mod tags;
pub mod tokenize;
pub mod validate;

#[cfg(feature = "nlprule")]
pub use annotate::NlpAnnotator;
pub use annotate::{Annotator, Sentence, TaggedToken};
pub use config::{Config, ConfigLoader, ConfigSources, ZeroDivision};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{
    ReadabilityCounts, ReadabilityReport, ReadingEaseBand, check_readability, grade_level,
    grade_level_of_sentences, grade_level_of_text, reading_ease, reading_ease_of_sentences,
    reading_ease_of_text,
};
pub use segment::split_sentences;
pub use syntax::{PartOfSpeech, SyntaxToken};
pub use tags::{PennTag, UniversalTag};
pub use tokenize::{extract_syntax_words, extract_words, segment_to_sentences};
pub use validate::{PennTreebankValidator, UniversalValidator, WordValidator};

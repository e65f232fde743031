//! Flesch Reading Ease and Flesch-Kincaid Grade Level.
//!
//! Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`.
//! Higher is easier.
//!
//! Grade Level: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`.
//! Approximates the U.S. school grade needed to follow the text; it has no
//! upper bound and a theoretical minimum of -3.40.
//!
//! Neither formula guards its divisions. With no sentences or no words the
//! result is NaN (0/0), which callers can read as "insufficient input".
//! Sentence, word and syllable totals always come from a single word list so
//! the two scores agree with each other.

use schemars::JsonSchema;
use serde::Serialize;

use crate::annotate::{Annotator, Sentence};
use crate::config::{Config, ZeroDivision};
use crate::error::{AnalysisError, AnalysisResult};
use crate::segment::split_sentences;
use crate::syllables;
use crate::syntax::SyntaxToken;
use crate::tokenize::{extract_syntax_words, extract_words, segment_to_sentences};

/// Flesch Reading Ease from raw counts.
pub fn reading_ease(sentences: usize, words: usize, syllables: f64) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables / words as f64;
    1.015f64.mul_add(
        -words_per_sentence,
        84.6f64.mul_add(-syllables_per_word, 206.835),
    )
}

/// Flesch-Kincaid Grade Level from raw counts.
pub fn grade_level(sentences: usize, words: usize, syllables: f64) -> f64 {
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables / words as f64;
    0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59
}

/// Sentence, word and syllable totals taken from one word list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ReadabilityCounts {
    /// Number of sentences.
    pub sentences: usize,
    /// Number of countable words.
    pub words: usize,
    /// Estimated syllables across all words.
    pub syllables: f64,
}

impl ReadabilityCounts {
    /// Count tagged sentences, keeping words the Penn Treebank validator accepts.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        Self::from_words(sentences.len(), &extract_words(sentences))
    }

    /// Count an already extracted word list, e.g. from a cloud syntax
    /// service that does not segment sentences itself.
    pub fn from_words(sentences: usize, words: &[&str]) -> Self {
        Self {
            sentences,
            words: words.len(),
            syllables: syllables::estimate_total(words.iter().copied()),
        }
    }

    /// Count cloud syntax tokens for `text`. The service returns no sentence
    /// structure, so sentences come from [`split_sentences`] over the same
    /// text the tokens were produced from.
    pub fn from_syntax(text: &str, tokens: &[SyntaxToken]) -> Self {
        Self::from_words(split_sentences(text).len(), &extract_syntax_words(tokens))
    }

    /// Flesch Reading Ease for these counts.
    pub fn reading_ease(&self) -> f64 {
        reading_ease(self.sentences, self.words, self.syllables)
    }

    /// Flesch-Kincaid Grade Level for these counts.
    pub fn grade_level(&self) -> f64 {
        grade_level(self.sentences, self.words, self.syllables)
    }

    /// Whether either formula would divide by zero.
    pub const fn is_empty(&self) -> bool {
        self.sentences == 0 || self.words == 0
    }
}

/// Segment and tag `text`, then count it.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_text<A: Annotator + ?Sized>(annotator: &A, text: &str) -> ReadabilityCounts {
    let counts = ReadabilityCounts::from_sentences(&segment_to_sentences(annotator, text));
    tracing::debug!(
        sentences = counts.sentences,
        words = counts.words,
        syllables = counts.syllables,
        "counted text"
    );
    counts
}

/// Flesch Reading Ease of raw text. NaN when the text has no words.
pub fn reading_ease_of_text<A: Annotator + ?Sized>(annotator: &A, text: &str) -> f64 {
    count_text(annotator, text).reading_ease()
}

/// Flesch Reading Ease of pre-segmented sentences.
pub fn reading_ease_of_sentences(sentences: &[Sentence]) -> f64 {
    ReadabilityCounts::from_sentences(sentences).reading_ease()
}

/// Flesch-Kincaid Grade Level of raw text. NaN when the text has no words.
pub fn grade_level_of_text<A: Annotator + ?Sized>(annotator: &A, text: &str) -> f64 {
    count_text(annotator, text).grade_level()
}

/// Flesch-Kincaid Grade Level of pre-segmented sentences.
pub fn grade_level_of_sentences(sentences: &[Sentence]) -> f64 {
    ReadabilityCounts::from_sentences(sentences).grade_level()
}

/// Interpretation of a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingEaseBand {
    /// 90 and above.
    VeryEasy,
    /// 80 to 90.
    Easy,
    /// 70 to 80.
    FairlyEasy,
    /// 60 to 70.
    PlainEnglish,
    /// 50 to 60.
    FairlyDifficult,
    /// 30 to 50.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadingEaseBand {
    /// Band for `score`; scores outside 0--100 fall into the nearest band.
    /// NaN has no band.
    pub fn from_score(score: f64) -> Option<Self> {
        if score.is_nan() {
            return None;
        }
        let band = match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::PlainEnglish,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        };
        Some(band)
    }

    /// School level the band corresponds to.
    pub const fn school_level(&self) -> &'static str {
        match self {
            Self::VeryEasy => "5th grade",
            Self::Easy => "6th grade",
            Self::FairlyEasy => "7th grade",
            Self::PlainEnglish => "8th & 9th grade",
            Self::FairlyDifficult => "10th to 12th grade",
            Self::Difficult => "College",
            Self::VeryDifficult => "College graduate",
        }
    }

    /// Plain-language description of the band.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::VeryEasy => {
                "Very easy to read. Easily understood by an average 11-year-old student."
            }
            Self::Easy => "Easy to read. Conversational English for consumers.",
            Self::FairlyEasy => "Fairly easy to read.",
            Self::PlainEnglish => {
                "Plain English. Easily understood by 13- to 15-year-old students."
            }
            Self::FairlyDifficult => "Fairly difficult to read.",
            Self::Difficult => "Difficult to read.",
            Self::VeryDifficult => {
                "Very difficult to read. Best understood by university graduates."
            }
        }
    }
}

/// Result of readability analysis.
///
/// NaN scores serialize as JSON `null`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Counts both scores were computed from.
    #[serde(flatten)]
    pub counts: ReadabilityCounts,
    /// Flesch Reading Ease score.
    pub reading_ease: f64,
    /// Flesch-Kincaid Grade Level score.
    pub grade: f64,
    /// Interpretation of the reading ease score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<ReadingEaseBand>,
    /// Maximum acceptable grade (if configured).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the grade exceeds the maximum.
    pub over_max: bool,
}

/// Check readability of text using both Flesch formulas.
///
/// Empty input follows [`Config::zero_division`]: NaN scores by default, or
/// [`AnalysisError::EmptyInput`] when configured to error.
#[tracing::instrument(skip_all, fields(text_len = text.len(), max_grade = ?config.max_grade))]
pub fn check_readability<A: Annotator + ?Sized>(
    annotator: &A,
    text: &str,
    config: &Config,
) -> AnalysisResult<ReadabilityReport> {
    let counts = count_text(annotator, text);

    if counts.is_empty() && config.zero_division == ZeroDivision::Error {
        return Err(AnalysisError::EmptyInput);
    }

    let reading_ease = counts.reading_ease();
    let grade = counts.grade_level();
    let over_max = config.max_grade.is_some_and(|max| grade > max);

    Ok(ReadabilityReport {
        counts,
        reading_ease,
        grade,
        band: ReadingEaseBand::from_score(reading_ease),
        max_grade: config.max_grade,
        over_max,
    })
}

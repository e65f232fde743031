//! Word validity: which tagged tokens count toward word and syllable totals.
//!
//! Each taxonomy has its own validator with its own policy:
//!
//! - [`PennTreebankValidator`] is a deny-list. Everything is a word except
//!   `UNKNOWN`, the possessive ending `POS` and `SYM`.
//! - [`UniversalValidator`] is an allow-list of content and function tags.
//!   Punctuation, symbols, `O` and unknown tags are excluded by omission.
//!
//! Missing data never fails: an absent token, tag container or tag string
//! just means "not a word".

use crate::annotate::TaggedToken;
use crate::syntax::SyntaxToken;
use crate::tags::{PennTag, UniversalTag};

/// Classifies a tagged token as a countable word.
pub trait WordValidator {
    /// The token type this validator understands.
    type Token;

    /// Whether `token` counts as a word.
    fn is_word(&self, token: &Self::Token) -> bool;

    /// Like [`is_word`](Self::is_word), with an absent token never a word.
    fn accepts(&self, token: Option<&Self::Token>) -> bool {
        token.is_some_and(|t| self.is_word(t))
    }
}

/// Penn tags that never count as words.
const REJECTED_PENN_TAGS: [PennTag; 3] = [
    PennTag::Unknown,
    PennTag::PossessiveEnding,
    PennTag::Symbol,
];

/// Universal tags that count as words.
const ACCEPTED_UNIVERSAL_TAGS: [UniversalTag; 15] = [
    UniversalTag::Adj,
    UniversalTag::Adp,
    UniversalTag::Adv,
    UniversalTag::Aux,
    UniversalTag::Conj,
    UniversalTag::Cconj,
    UniversalTag::Det,
    UniversalTag::Intj,
    UniversalTag::Noun,
    UniversalTag::Num,
    UniversalTag::Part,
    UniversalTag::Pron,
    UniversalTag::Propn,
    UniversalTag::Sconj,
    UniversalTag::Verb,
];

/// Validator for tokens from a local Penn Treebank tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct PennTreebankValidator;

impl WordValidator for PennTreebankValidator {
    type Token = TaggedToken;

    fn is_word(&self, token: &TaggedToken) -> bool {
        let tag = token
            .pos_tag
            .as_deref()
            .map_or(PennTag::Unknown, PennTag::parse);
        !REJECTED_PENN_TAGS.contains(&tag)
    }
}

/// Validator for tokens from a cloud syntax service.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversalValidator;

impl WordValidator for UniversalValidator {
    type Token = SyntaxToken;

    fn is_word(&self, token: &SyntaxToken) -> bool {
        token
            .tag()
            .is_some_and(|tag| ACCEPTED_UNIVERSAL_TAGS.contains(&UniversalTag::parse(tag)))
    }
}

//! Universal-dependency style part-of-speech tags, as returned by cloud
//! syntax-analysis services.

use std::fmt;

/// A universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniversalTag {
    /// `ADJ` adjective.
    Adj,
    /// `ADP` adposition.
    Adp,
    /// `ADV` adverb.
    Adv,
    /// `AUX` auxiliary.
    Aux,
    /// `CONJ` conjunction (legacy code).
    Conj,
    /// `CCONJ` coordinating conjunction.
    Cconj,
    /// `DET` determiner.
    Det,
    /// `INTJ` interjection.
    Intj,
    /// `NOUN` noun.
    Noun,
    /// `NUM` numeral.
    Num,
    /// `O` other.
    Other,
    /// `PART` particle.
    Part,
    /// `PRON` pronoun.
    Pron,
    /// `PROPN` proper noun.
    Propn,
    /// `PUNCT` punctuation.
    Punct,
    /// `SCONJ` subordinating conjunction.
    Sconj,
    /// `SYM` symbol.
    Sym,
    /// `VERB` verb.
    Verb,
    /// Sentinel for anything that is not one of the codes above.
    Unknown,
}

impl UniversalTag {
    /// Every member, `Unknown` last.
    pub const ALL: [Self; 19] = [
        Self::Adj,
        Self::Adp,
        Self::Adv,
        Self::Aux,
        Self::Conj,
        Self::Cconj,
        Self::Det,
        Self::Intj,
        Self::Noun,
        Self::Num,
        Self::Other,
        Self::Part,
        Self::Pron,
        Self::Propn,
        Self::Punct,
        Self::Sconj,
        Self::Sym,
        Self::Verb,
        Self::Unknown,
    ];

    /// Parse a raw tag string. Never fails; unrecognised input is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CONJ" => Self::Conj,
            "CCONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "O" => Self::Other,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical tag code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Conj => "CONJ",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Other => "O",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for UniversalTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for UniversalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Penn Treebank part-of-speech tags.

use std::fmt;

/// A Penn Treebank part-of-speech tag.
///
/// Only the alphabetic word-class tags are members. Punctuation tags
/// emitted by Penn-style taggers (`.`, `,`, `:`, `` `` ``, `''`, `-LRB-`,
/// `-RRB-`, `$`, `#`) have no member and parse as [`PennTag::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PennTag {
    /// `CC` coordinating conjunction.
    CoordinatingConjunction,
    /// `CD` cardinal number.
    CardinalNumber,
    /// `DT` determiner.
    Determiner,
    /// `EX` existential "there".
    ExistentialThere,
    /// `FW` foreign word.
    ForeignWord,
    /// `IN` preposition or subordinating conjunction.
    Preposition,
    /// `JJ` adjective.
    Adjective,
    /// `JJR` comparative adjective.
    AdjectiveComparative,
    /// `JJS` superlative adjective.
    AdjectiveSuperlative,
    /// `LS` list item marker.
    ListItemMarker,
    /// `MD` modal.
    Modal,
    /// `NN` singular or mass noun.
    Noun,
    /// `NNS` plural noun.
    NounPlural,
    /// `NNP` singular proper noun.
    ProperNoun,
    /// `NNPS` plural proper noun.
    ProperNounPlural,
    /// `PDT` predeterminer.
    Predeterminer,
    /// `POS` possessive ending.
    PossessiveEnding,
    /// `PRP` personal pronoun.
    PersonalPronoun,
    /// `PRP$` possessive pronoun.
    PossessivePronoun,
    /// `RB` adverb.
    Adverb,
    /// `RBR` comparative adverb.
    AdverbComparative,
    /// `RBS` superlative adverb.
    AdverbSuperlative,
    /// `RP` particle.
    Particle,
    /// `SYM` symbol.
    Symbol,
    /// `TO` "to".
    To,
    /// `UH` interjection.
    Interjection,
    /// `VB` verb, base form.
    Verb,
    /// `VBD` verb, past tense.
    VerbPastTense,
    /// `VBG` verb, gerund or present participle.
    VerbGerund,
    /// `VBN` verb, past participle.
    VerbPastParticiple,
    /// `VBP` verb, non-third-person singular present.
    VerbNonThirdPersonPresent,
    /// `VBZ` verb, third-person singular present.
    VerbThirdPersonPresent,
    /// `WDT` wh-determiner.
    WhDeterminer,
    /// `WP` wh-pronoun.
    WhPronoun,
    /// `WP$` possessive wh-pronoun.
    PossessiveWhPronoun,
    /// `WRB` wh-adverb.
    WhAdverb,
    /// Sentinel for anything that is not one of the codes above.
    Unknown,
}

impl PennTag {
    /// Every member, `Unknown` last.
    pub const ALL: [Self; 37] = [
        Self::CoordinatingConjunction,
        Self::CardinalNumber,
        Self::Determiner,
        Self::ExistentialThere,
        Self::ForeignWord,
        Self::Preposition,
        Self::Adjective,
        Self::AdjectiveComparative,
        Self::AdjectiveSuperlative,
        Self::ListItemMarker,
        Self::Modal,
        Self::Noun,
        Self::NounPlural,
        Self::ProperNoun,
        Self::ProperNounPlural,
        Self::Predeterminer,
        Self::PossessiveEnding,
        Self::PersonalPronoun,
        Self::PossessivePronoun,
        Self::Adverb,
        Self::AdverbComparative,
        Self::AdverbSuperlative,
        Self::Particle,
        Self::Symbol,
        Self::To,
        Self::Interjection,
        Self::Verb,
        Self::VerbPastTense,
        Self::VerbGerund,
        Self::VerbPastParticiple,
        Self::VerbNonThirdPersonPresent,
        Self::VerbThirdPersonPresent,
        Self::WhDeterminer,
        Self::WhPronoun,
        Self::PossessiveWhPronoun,
        Self::WhAdverb,
        Self::Unknown,
    ];

    /// Parse a raw tag string. Never fails; unrecognised input is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CC" => Self::CoordinatingConjunction,
            "CD" => Self::CardinalNumber,
            "DT" => Self::Determiner,
            "EX" => Self::ExistentialThere,
            "FW" => Self::ForeignWord,
            "IN" => Self::Preposition,
            "JJ" => Self::Adjective,
            "JJR" => Self::AdjectiveComparative,
            "JJS" => Self::AdjectiveSuperlative,
            "LS" => Self::ListItemMarker,
            "MD" => Self::Modal,
            "NN" => Self::Noun,
            "NNS" => Self::NounPlural,
            "NNP" => Self::ProperNoun,
            "NNPS" => Self::ProperNounPlural,
            "PDT" => Self::Predeterminer,
            "POS" => Self::PossessiveEnding,
            "PRP" => Self::PersonalPronoun,
            "PRP$" => Self::PossessivePronoun,
            "RB" => Self::Adverb,
            "RBR" => Self::AdverbComparative,
            "RBS" => Self::AdverbSuperlative,
            "RP" => Self::Particle,
            "SYM" => Self::Symbol,
            "TO" => Self::To,
            "UH" => Self::Interjection,
            "VB" => Self::Verb,
            "VBD" => Self::VerbPastTense,
            "VBG" => Self::VerbGerund,
            "VBN" => Self::VerbPastParticiple,
            "VBP" => Self::VerbNonThirdPersonPresent,
            "VBZ" => Self::VerbThirdPersonPresent,
            "WDT" => Self::WhDeterminer,
            "WP" => Self::WhPronoun,
            "WP$" => Self::PossessiveWhPronoun,
            "WRB" => Self::WhAdverb,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical tag code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CoordinatingConjunction => "CC",
            Self::CardinalNumber => "CD",
            Self::Determiner => "DT",
            Self::ExistentialThere => "EX",
            Self::ForeignWord => "FW",
            Self::Preposition => "IN",
            Self::Adjective => "JJ",
            Self::AdjectiveComparative => "JJR",
            Self::AdjectiveSuperlative => "JJS",
            Self::ListItemMarker => "LS",
            Self::Modal => "MD",
            Self::Noun => "NN",
            Self::NounPlural => "NNS",
            Self::ProperNoun => "NNP",
            Self::ProperNounPlural => "NNPS",
            Self::Predeterminer => "PDT",
            Self::PossessiveEnding => "POS",
            Self::PersonalPronoun => "PRP",
            Self::PossessivePronoun => "PRP$",
            Self::Adverb => "RB",
            Self::AdverbComparative => "RBR",
            Self::AdverbSuperlative => "RBS",
            Self::Particle => "RP",
            Self::Symbol => "SYM",
            Self::To => "TO",
            Self::Interjection => "UH",
            Self::Verb => "VB",
            Self::VerbPastTense => "VBD",
            Self::VerbGerund => "VBG",
            Self::VerbPastParticiple => "VBN",
            Self::VerbNonThirdPersonPresent => "VBP",
            Self::VerbThirdPersonPresent => "VBZ",
            Self::WhDeterminer => "WDT",
            Self::WhPronoun => "WP",
            Self::PossessiveWhPronoun => "WP$",
            Self::WhAdverb => "WRB",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for PennTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips() {
        for tag in PennTag::ALL {
            assert_eq!(PennTag::parse(tag.as_str()), tag);
        }
    }

    #[test]
    fn dollar_suffixed_codes() {
        assert_eq!(PennTag::parse("PRP$"), PennTag::PossessivePronoun);
        assert_eq!(PennTag::parse("WP$"), PennTag::PossessiveWhPronoun);
    }

    #[test]
    fn unrecognised_input_is_unknown() {
        assert_eq!(PennTag::parse(""), PennTag::Unknown);
        assert_eq!(PennTag::parse("foo"), PennTag::Unknown);
        assert_eq!(PennTag::parse("."), PennTag::Unknown);
        assert_eq!(PennTag::parse("-LRB-"), PennTag::Unknown);
        assert_eq!(PennTag::parse("$"), PennTag::Unknown);
        assert_eq!(PennTag::parse(" NN"), PennTag::Unknown);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(PennTag::parse("nn"), PennTag::Unknown);
        assert_eq!(PennTag::parse("Vbz"), PennTag::Unknown);
        assert_eq!(PennTag::parse("NN"), PennTag::Noun);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(PennTag::VerbPastTense.to_string(), "VBD");
        assert_eq!(PennTag::from("POS"), PennTag::PossessiveEnding);
    }
}

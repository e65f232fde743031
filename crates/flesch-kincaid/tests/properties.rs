//! Property tests for the totality and ordering guarantees.

use flesch_kincaid::syllables::{estimate, vowel_group_estimate};
use flesch_kincaid::{PennTag, Sentence, TaggedToken, UniversalTag, extract_words, split_sentences};
use proptest::prelude::*;

const TAGS: &[&str] = &["NN", "VBD", "DT", "POS", "SYM", ".", ",", "JJ", "foo", ""];

fn sentences_strategy() -> impl Strategy<Value = Vec<Sentence>> {
    prop::collection::vec(
        prop::collection::vec(("[a-z]{1,8}", prop::sample::select(TAGS)), 1..8),
        0..5,
    )
    .prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|tokens| {
                let text = tokens
                    .iter()
                    .map(|(w, _)| w.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                Sentence::new(
                    text,
                    tokens
                        .into_iter()
                        .map(|(w, tag)| TaggedToken::new(w, tag))
                        .collect(),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn alphabetic_words_never_go_negative(word in "[a-zA-Z]{1,24}") {
        prop_assert!(estimate(&word) >= 0.0);
        prop_assert_eq!(estimate(&word), vowel_group_estimate(&word));
    }

    #[test]
    fn non_alphabetic_tokens_are_one_syllable(word in "[a-z]{0,6}[0-9'.\\-][a-z0-9]{0,6}") {
        prop_assert_eq!(estimate(&word), 1.0);
    }

    #[test]
    fn tag_parsing_is_total(raw in ".{0,8}") {
        let penn = PennTag::parse(&raw);
        prop_assert!(penn == PennTag::Unknown || penn.as_str() == raw);
        let universal = UniversalTag::parse(&raw);
        prop_assert!(universal == UniversalTag::Unknown || universal.as_str() == raw);
    }

    #[test]
    fn extraction_is_repeatable(sentences in sentences_strategy()) {
        prop_assert_eq!(extract_words(&sentences), extract_words(&sentences));
    }

    #[test]
    fn extraction_preserves_token_order(sentences in sentences_strategy()) {
        let expected: Vec<&str> = sentences
            .iter()
            .flat_map(|s| &s.tokens)
            .filter(|t| !matches!(t.pos_tag.as_deref(), Some("POS" | "SYM" | "." | "," | "foo" | "")))
            .map(|t| t.text.as_str())
            .collect();
        prop_assert_eq!(extract_words(&sentences), expected);
    }

    #[test]
    fn sentence_splitting_is_deterministic(text in "[a-zA-Z .,!?']{0,80}") {
        prop_assert_eq!(split_sentences(&text), split_sentences(&text));
    }

    #[test]
    fn split_sentences_are_trimmed_and_nonempty(text in "[a-zA-Z0-9 .,!?'\n]{0,80}") {
        for sentence in split_sentences(&text) {
            prop_assert_eq!(sentence, sentence.trim());
            prop_assert!(sentence.chars().any(char::is_alphanumeric));
            prop_assert!(text.contains(sentence));
        }
    }
}

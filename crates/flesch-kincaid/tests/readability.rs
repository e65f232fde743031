//! End-to-end scoring through the public API.

use flesch_kincaid::syntax::parse_response;
use flesch_kincaid::{
    Annotator, Config, ReadabilityCounts, ReadingEaseBand, Sentence, TaggedToken, check_readability,
    extract_syntax_words, extract_words, grade_level, grade_level_of_sentences,
    grade_level_of_text, reading_ease, reading_ease_of_sentences, reading_ease_of_text,
    segment_to_sentences, split_sentences,
};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

const CINDERELLA_EXCERPT: &str = "A rich man's wife became sick, and when she felt that her end \
    was drawing near, she called her only daughter to her bedside and said, \"Dear child, remain \
    pious and good, and then our dear God will always protect you, and I will look down on you \
    from heaven and be near you.\" With this she closed her eyes and died. The girl went out to \
    her mother's grave every day and wept, and she remained pious and good. When winter came the \
    snow spread a white cloth over the grave, and when the spring sun had removed it again, the \
    man took himself another wife. This wife brought two daughters into the house with her. They \
    were beautiful, with fair faces, but evil and dark hearts. Times soon grew very bad for the \
    poor stepchild.";

/// Replays fixed tagger output, the way an external tagging library would.
struct Fixture(Vec<Sentence>);

impl Annotator for Fixture {
    fn annotate(&self, _text: &str) -> Vec<Sentence> {
        self.0.clone()
    }
}

/// Splits sentences and whitespace; trailing `.`/`,` become their own
/// punctuation-tagged tokens and every other token is tagged `NN`.
struct Whitespace;

impl Annotator for Whitespace {
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .map(|sentence| {
                let mut tokens = Vec::new();
                for chunk in sentence.split_whitespace() {
                    let word = chunk.trim_end_matches(['.', ',', '!', '?']);
                    if !word.is_empty() {
                        tokens.push(TaggedToken::new(word, "NN"));
                    }
                    for mark in chunk[word.len()..].chars() {
                        let tag = if mark == ',' { "," } else { "." };
                        tokens.push(TaggedToken::new(mark.to_string(), tag));
                    }
                }
                Sentence::new(sentence, tokens)
            })
            .collect()
    }
}

fn tagged(text: &str, tokens: &[(&str, &str)]) -> Sentence {
    Sentence::new(
        text,
        tokens
            .iter()
            .map(|&(word, tag)| TaggedToken::new(word, tag))
            .collect(),
    )
}

fn pangram() -> Sentence {
    tagged(
        PANGRAM,
        &[
            ("The", "DT"),
            ("quick", "JJ"),
            ("brown", "JJ"),
            ("fox", "NN"),
            ("jumps", "VBZ"),
            ("over", "IN"),
            ("the", "DT"),
            ("lazy", "JJ"),
            ("dog", "NN"),
            (".", "."),
        ],
    )
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn pangram_is_one_sentence_of_nine_words() {
    let annotator = Fixture(vec![pangram()]);
    let sentences = segment_to_sentences(&annotator, PANGRAM);
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].tokens.len(), 10);

    let words = extract_words(&sentences);
    assert_eq!(
        words,
        vec!["The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]
    );
}

#[test]
fn pangram_scores_follow_the_heuristic() {
    let annotator = Fixture(vec![pangram()]);
    let counts = ReadabilityCounts::from_sentences(&segment_to_sentences(&annotator, PANGRAM));
    assert_eq!((counts.sentences, counts.words), (1, 9));
    assert_eq!(counts.syllables, 9.0);

    approx(reading_ease_of_text(&annotator, PANGRAM), 113.1);
    approx(grade_level_of_text(&annotator, PANGRAM), 0.39 * 9.0 + 11.8 - 15.59);
    approx(reading_ease_of_sentences(&[pangram()]), 113.1);
}

#[test]
fn published_pangram_scores_from_counts() {
    // Ten syllables is the reference count for the pangram.
    approx(reading_ease(1, 9, 10.0), 103.7);
    approx(grade_level(1, 9, 10.0), 1.031_111_111_111_111);
}

#[test]
fn empty_text_scores_are_nan() {
    for text in ["", "   ", "\n\n"] {
        assert!(reading_ease_of_text(&Whitespace, text).is_nan());
        assert!(grade_level_of_text(&Whitespace, text).is_nan());
    }
}

#[test]
fn cinderella_excerpt_segments_into_seven_sentences() {
    let sentences = split_sentences(CINDERELLA_EXCERPT);
    assert_eq!(sentences.len(), 7);
    assert!(sentences[0].ends_with("near you.\""));
    assert!(sentences[1].starts_with("With this"));
    assert_eq!(sentences[6], "Times soon grew very bad for the poor stepchild.");
}

#[test]
fn cinderella_excerpt_scores() {
    let sentences = segment_to_sentences(&Whitespace, CINDERELLA_EXCERPT);
    assert_eq!(sentences.len(), 7);

    let words = extract_words(&sentences);
    assert_eq!(words.first(), Some(&"A"));
    assert_eq!(words.last(), Some(&"stepchild"));
    assert!(!words.iter().any(|w| matches!(*w, "," | ".")));

    let ease = reading_ease_of_sentences(&sentences);
    let grade = grade_level_of_sentences(&sentences);
    assert!(ease.is_finite() && grade.is_finite());
    approx(ease, reading_ease_of_text(&Whitespace, CINDERELLA_EXCERPT));
    assert_eq!(ReadingEaseBand::from_score(ease), Some(ReadingEaseBand::VeryEasy));
}

#[test]
fn words_keep_order_across_sentences() {
    let sentences = segment_to_sentences(&Whitespace, "Alpha beta. Gamma delta! Epsilon zeta?");
    assert_eq!(sentences.len(), 3);
    assert_eq!(
        extract_words(&sentences),
        vec!["Alpha", "beta", "Gamma", "delta", "Epsilon", "zeta"]
    );
}

#[test]
fn single_letters_end_sentences() {
    for (text, expected) in [
        ("I took vitamin C. Then I slept.", 2),
        ("We chose plan B. It worked.", 2),
        ("He fought in World War I. He came home.", 2),
        ("J. K. Rowling writes. She lives in Scotland.", 2),
    ] {
        let counts = ReadabilityCounts::from_sentences(&segment_to_sentences(&Whitespace, text));
        assert_eq!(counts.sentences, expected, "{text}");
    }
}

#[test]
fn external_annotator_output_is_scored() {
    let annotator = Fixture(vec![
        tagged(
            "The man's dog barked.",
            &[("The", "DT"), ("man", "NN"), ("'s", "POS"), ("dog", "NN"), ("barked", "VBD"), (".", ".")],
        ),
        tagged("Cats & dogs!", &[("Cats", "NNS"), ("&", "SYM"), ("dogs", "NNS"), ("!", ".")]),
    ]);

    let counts = ReadabilityCounts::from_sentences(&segment_to_sentences(&annotator, "ignored"));
    assert_eq!(counts.sentences, 2);
    assert_eq!(counts.words, 6);
    // The 0, man 1, dog 1, barked 2, Cats 1, dogs 1
    assert_eq!(counts.syllables, 6.0);
    approx(reading_ease_of_text(&annotator, "ignored"), reading_ease(2, 6, 6.0));
}

#[test]
fn empty_annotator_output_is_nan() {
    let annotator = Fixture(Vec::new());
    assert!(reading_ease_of_text(&annotator, "Some text.").is_nan());
}

#[test]
fn cloud_tokens_are_scored_from_their_own_word_list() {
    let text = "I love Seattle's rain! %";
    let json = r#"{"SyntaxTokens": [
        {"TokenId": 1, "Text": "I", "PartOfSpeech": {"Tag": "PRON", "Score": 0.99}},
        {"TokenId": 2, "Text": "love", "PartOfSpeech": {"Tag": "VERB", "Score": 0.99}},
        {"TokenId": 3, "Text": "Seattle", "PartOfSpeech": {"Tag": "PROPN", "Score": 0.98}},
        {"TokenId": 4, "Text": "'s", "PartOfSpeech": {"Tag": "PART", "Score": 0.90}},
        {"TokenId": 5, "Text": "rain", "PartOfSpeech": {"Tag": "NOUN", "Score": 0.97}},
        {"TokenId": 6, "Text": "!", "PartOfSpeech": {"Tag": "PUNCT", "Score": 0.99}},
        {"TokenId": 7, "Text": "%", "PartOfSpeech": {"Tag": "SYM", "Score": 0.99}}
    ]}"#;
    let tokens = parse_response(json).unwrap();
    let words = extract_syntax_words(&tokens);
    assert_eq!(words, vec!["I", "love", "Seattle", "'s", "rain"]);

    let counts = ReadabilityCounts::from_syntax(text, &tokens);
    assert_eq!(counts.sentences, 1);
    assert_eq!(counts.words, 5);
    // I 1, love 1, Seattle 1, 's 1, rain 1
    assert_eq!(counts.syllables, 5.0);
}

#[test]
fn report_round_trip_through_config() {
    let config = Config {
        max_grade: Some(20.0),
        ..Config::default()
    };
    let report = check_readability(&Whitespace, CINDERELLA_EXCERPT, &config).unwrap();
    assert_eq!(report.counts.sentences, 7);
    assert!(!report.over_max);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["sentences"], 7);
    assert_eq!(json["band"], "very-easy");
    assert_eq!(json["max_grade"], 20.0);
}

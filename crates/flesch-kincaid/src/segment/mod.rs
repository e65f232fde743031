//! Sentence segmentation for text that arrives without sentence structure.
//!
//! Cloud syntax services return a flat token list, so the sentence count
//! for their output comes from this splitter. It is a character scan with
//! context-based boundary detection: abbreviations, initials, decimals,
//! URLs, ellipses and quoted speech do not end a sentence. Closing quotes
//! and brackets stay with the sentence they close.

mod abbreviations;

use abbreviations::{is_abbreviation, is_acronym, is_lone_capital};

/// Split text into trimmed sentence slices, in order.
///
/// Fragments without any alphanumeric character (a stray `...` or `--`) are
/// not sentences and are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let run_start = i;
        while i + 1 < chars.len() && is_terminator(chars[i + 1].1) {
            i += 1;
        }
        let run_end = i;
        while i + 1 < chars.len() && is_closer(chars[i + 1].1) {
            i += 1;
        }

        if is_boundary(&chars, run_start, run_end, i) {
            let (offset, ch) = chars[i];
            let end = offset + ch.len_utf8();
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
        i += 1;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}')
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, raw: &'a str) {
    let sentence = raw.trim();
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence);
    }
}

/// Decide whether the terminator run `run_start..=run_end` (followed by
/// closers up to `last`) ends a sentence.
fn is_boundary(chars: &[(usize, char)], run_start: usize, run_end: usize, last: usize) -> bool {
    let Some(&(_, next)) = chars.get(last + 1) else {
        return true;
    };

    // Glued to the following text: 3.14, example.com, e.g
    if !next.is_whitespace() {
        return false;
    }

    let Some(following) = chars[last + 1..]
        .iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace())
    else {
        return true;
    };

    if following.is_lowercase() {
        return false;
    }

    let run = &chars[run_start..=run_end];
    if run.iter().any(|&(_, c)| c == '!' || c == '?') {
        return true;
    }

    // Ellipsis
    if run.len() > 1 {
        return false;
    }

    let word = word_before(chars, run_start);
    !(is_abbreviation(&word) || is_acronym(&word) || is_initial(chars, &word, run_start, last))
}

/// Whether the lone capital `word`, ending at `run_start`, is a name
/// initial rather than a letter that ends a sentence ("vitamin C.").
///
/// It is an initial when a neighbouring word is also a lone capital
/// ("J. K. Rowling"), or when it follows a capitalised word ("John F.
/// Kennedy"). "I" after a capitalised word stays sentence-final, since it
/// is far more often the pronoun or a numeral ("World War I.").
fn is_initial(chars: &[(usize, char)], word: &str, run_start: usize, last: usize) -> bool {
    if !is_lone_capital(word) {
        return false;
    }
    let previous = word_ending_at(chars, run_start - word.chars().count());
    let next = word_starting_at(chars, last + 1);
    if is_lone_capital(&previous) || is_lone_capital(&next) {
        return true;
    }
    word != "I" && previous.chars().next().is_some_and(char::is_uppercase)
}

/// The run of alphanumerics and periods immediately before `pos`.
fn word_before(chars: &[(usize, char)], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .map(|&(_, c)| c)
        .take_while(|&c| c.is_alphanumeric() || c == '.')
        .collect();
    word.reverse();
    word.into_iter().collect()
}

/// The whitespace-delimited word ending before `pos`, skipping whitespace.
fn word_ending_at(chars: &[(usize, char)], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .map(|&(_, c)| c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect();
    word.reverse();
    word.into_iter().collect()
}

/// The whitespace-delimited word starting at or after `pos`.
fn word_starting_at(chars: &[(usize, char)], pos: usize) -> String {
    chars
        .get(pos..)
        .unwrap_or_default()
        .iter()
        .map(|&(_, c)| c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect()
}

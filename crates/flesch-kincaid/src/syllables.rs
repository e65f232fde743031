//! Dictionary-free syllable estimation.
//!
//! The estimate is a vowel-group count with two silent-ending corrections:
//!
//! 1. Blank input has 0 syllables.
//! 2. Each maximal run of `a e i o u y` (any case) is one group.
//! 3. A word longer than two characters ending in `es` loses one group.
//! 4. Otherwise a word longer than one character ending in `e` loses one group.
//!
//! [`estimate`] additionally gives any token that is not purely ASCII
//! letters exactly one syllable. Tokens with digits, apostrophes or other
//! punctuation are usually abbreviations, numbers or clitics (`n't`, `U.S.`)
//! passed through by the tokenizer.
//!
//! The heuristic is deliberately approximate. It undercounts syllabic `le`
//! (`table` is 1) and silent letters beyond the two handled endings, and the
//! readability coefficients assume exactly this bias.

/// Estimate the syllables in one word, as used by the readability formulas.
pub fn estimate(word: &str) -> f64 {
    if word.trim().is_empty() {
        return 0.0;
    }
    if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return 1.0;
    }
    f64::from(corrected_vowel_groups(word))
}

/// Estimate syllables by vowel groups alone, without the one-syllable
/// fallback for non-alphabetic tokens.
pub fn vowel_group_estimate(word: &str) -> f64 {
    if word.trim().is_empty() {
        return 0.0;
    }
    f64::from(corrected_vowel_groups(word))
}

/// Sum of [`estimate`] over `words`.
pub fn estimate_total<'a, I>(words: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(estimate).sum()
}

fn corrected_vowel_groups(word: &str) -> u32 {
    let groups = vowel_groups(word);
    let lower = word.to_lowercase();
    let len = lower.chars().count();

    let silent_es = len > 2 && lower.ends_with("es");
    let silent_e = len > 1 && lower.ends_with('e');
    if silent_es || silent_e {
        groups.saturating_sub(1)
    } else {
        groups
    }
}

fn vowel_groups(word: &str) -> u32 {
    let mut groups = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            groups += 1;
        }
        previous_was_vowel = is_vowel;
    }

    groups
}

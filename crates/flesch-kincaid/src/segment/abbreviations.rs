//! Abbreviations that end in a period without ending a sentence.
//!
//! Abbreviations that double as everyday words ("no", "sun", "sat") are left
//! out, since those would swallow real sentence breaks.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Dotted acronyms of two or more letters (U.S, U.S.A) as seen before the
/// final period.
static ACRONYM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]$").expect("valid regex"));

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr", "hon",
    "esq", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "rep",
    "gov", "pres",
];

const DEGREES: &[&str] = &[
    "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m", "d.d.s", "phd",
];

const LATIN: &[&str] = &["etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "n.b", "p.s"];

const CALENDAR: &[&str] = &[
    "a.m", "p.m", "b.c", "a.d", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "mon", "tue", "tues", "thu", "thur", "thurs", "fri",
];

const PLACES: &[&str] = &[
    "st", "ave", "blvd", "rd", "apt", "ste", "bldg", "dept", "u.s", "u.k", "u.s.a", "e.u",
];

const ORGANISATIONS: &[&str] = &["inc", "corp", "ltd", "llc", "bros", "assn", "intl"];

const MEASURES: &[&str] = &[
    "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mi", "sq", "mph", "rpm",
    "vol", "pp", "fig", "approx", "avg",
];

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        TITLES,
        DEGREES,
        LATIN,
        CALENDAR,
        PLACES,
        ORGANISATIONS,
        MEASURES,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
});

/// Check whether `word` (with or without its trailing period) is a known
/// abbreviation. Case-insensitive.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}

/// Check whether `word` is a dotted acronym such as `U.S.A`.
pub fn is_acronym(word: &str) -> bool {
    ACRONYM_PATTERN.is_match(word.trim_end_matches('.'))
}

/// Check whether `word` is a single capital letter, with or without its
/// period (`K`, `K.`).
pub fn is_lone_capital(word: &str) -> bool {
    let letter = word.strip_suffix('.').unwrap_or(word);
    letter.len() == 1 && letter.bytes().all(|b| b.is_ascii_uppercase())
}

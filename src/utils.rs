//! Text normalization shared by indexing and querying.
//!
//! Both sides of a lookup must agree byte-for-byte on what a word looks like,
//! so everything that turns raw text into tokens goes through [`words`].

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Café" → "cafe"
/// - "Naïve  Bayes" → "naive bayes"
///
/// Without the `unicode-normalization` feature (e.g. a lean WASM build) this
/// only lowercases and collapses whitespace.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining diacritical marks left over after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word boundary detection: anything that is not alphanumeric separates words.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split text into normalized words.
///
/// "Robot Operating System - a flexible framework" yields
/// `["robot", "operating", "system", "a", "flexible", "framework"]`.
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_word_boundary)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every non-empty leading substring of `word`, shortest first, split on
/// character boundaries.
pub fn char_prefixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .filter(|end| *end > 0)
        .map(move |end| &word[..end])
}

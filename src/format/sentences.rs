//! Whitespace normalization and sentence boundary detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence boundary: terminal punctuation, whitespace, then an uppercase
/// letter opening the next sentence. The `regex` crate has no lookahead, so
/// the match includes that letter and the split lands just before it.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").expect("sentence boundary regex"));

/// Collapse whitespace runs (including newlines) into single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// Split normalized text into sentences.
///
/// Splits only after `.`, `!` or `?` followed by whitespace and an uppercase
/// letter. Abbreviations and decimals usually survive intact; text without
/// terminal punctuation stays joined to the previous sentence. This is a
/// heuristic, not a linguistic unit.
///
/// Empty fragments from stray punctuation are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // [A-Z] is a single ASCII byte, so this stays on a char boundary
        let split_at = boundary.end() - 1;
        let sentence = text[start..split_at].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = split_at;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

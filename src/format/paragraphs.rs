//! Paragraph assembly rules.
//!
//! Sentences accumulate into a paragraph until one of three conditions
//! closes it: the sentence cap, the character budget, or a trigger phrase
//! in the sentence just added. A paragraph holding a single sentence is
//! never force-closed.

use super::sentences::{normalize_whitespace, split_sentences};

/// Sentences per paragraph before a forced break.
pub const MAX_PARAGRAPH_SENTENCES: usize = 3;

/// Character budget for one paragraph (space-joined sentence lengths).
pub const MAX_PARAGRAPH_CHARS: usize = 200;

/// Phrases that force a paragraph break after the sentence containing them.
///
/// Matched against the lowercased sentence, so any capitalization hits.
pub const TRIGGER_PHRASES: &[&str] = &[
    "before joining",
    "before wsa",
    "since joining",
    "since wsa",
    "wall street academy has",
    "wsa has",
    "what wsa means",
    "thank you",
    "thanks",
    "grateful",
    "appreciate",
    "the community",
    "the way you",
    "i learned",
    "i've learned",
];

fn contains_trigger(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Length of the paragraph once its sentences are joined by single spaces.
fn joined_len(sentences: &[String]) -> usize {
    let chars: usize = sentences.iter().map(|s| s.chars().count()).sum();
    chars + sentences.len().saturating_sub(1)
}

/// Reformat a testimonial into blank-line separated paragraphs.
///
/// Whitespace is normalized, the text is split into sentences, and the
/// sentences are regrouped into paragraphs joined by `\n\n`. Empty or
/// whitespace-only input comes back unchanged.
///
/// A lone sentence is never force-closed, so a single-sentence testimonial
/// is emitted verbatim as one paragraph even when it exceeds the character
/// budget or contains a trigger phrase.
///
/// # Example
/// ```ignore
/// let out = format("Sentence one. Sentence two. Sentence three. Sentence four.");
/// assert_eq!(
///     out,
///     "Sentence one. Sentence two. Sentence three.\n\nSentence four."
/// );
/// ```
pub fn format(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let normalized = normalize_whitespace(text);
    let sentences = split_sentences(&normalized);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for sentence in sentences {
        let triggered = contains_trigger(&sentence);
        current.push(sentence);

        let should_close = current.len() >= MAX_PARAGRAPH_SENTENCES
            || joined_len(&current) > MAX_PARAGRAPH_CHARS
            || triggered;

        if should_close && current.len() > 1 {
            paragraphs.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_unchanged() {
        assert_eq!(format(""), "");
        assert_eq!(format("   "), "   ");
    }

    #[test]
    fn test_no_boundary_single_paragraph() {
        assert_eq!(
            format("just  some words\nwithout punctuation"),
            "just some words without punctuation"
        );
    }

    #[test]
    fn test_three_sentences_one_paragraph() {
        let out = format("One is short. Two is short. Three is short.");
        assert_eq!(out, "One is short. Two is short. Three is short.");
    }

    #[test]
    fn test_break_after_third_sentence() {
        let out = format("Sentence one. Sentence two. Sentence three. Sentence four.");
        assert_eq!(
            out,
            "Sentence one. Sentence two. Sentence three.\n\nSentence four."
        );
    }

    #[test]
    fn test_trigger_phrase_closes_paragraph() {
        let out = format("The course is great. Thank you for everything. More to say. And more.");
        assert_eq!(
            out,
            "The course is great. Thank you for everything.\n\nMore to say. And more."
        );
    }

    #[test]
    fn test_trigger_in_second_sentence_keeps_pair_together() {
        let out = format("It changed everything. Thank you so much.");
        assert_eq!(out, "It changed everything. Thank you so much.");
    }

    #[test]
    fn test_lone_long_sentence_not_closed() {
        let long = "a".repeat(250);
        let text = format!("This opener runs on and on {long} without a boundary. Next one.");
        let out = format(&text);
        // the long first sentence stays open until the second arrives,
        // then both close together as one paragraph
        assert_eq!(out.matches("\n\n").count(), 0);
    }

    #[test]
    fn test_character_budget_closes_after_second_sentence() {
        let s1 = format!("First part {}.", "x".repeat(120));
        let s2 = format!("Second part {}.", "y".repeat(120));
        let out = format(&format!("{s1} {s2} Tail one. Tail two."));
        let paragraphs: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0], format!("{s1} {s2}"));
        assert_eq!(paragraphs[1], "Tail one. Tail two.");
    }

    #[test]
    fn test_trigger_case_insensitive() {
        let out = format("One thing. GRATEFUL for it all. Two thing. Three thing.");
        assert!(out.starts_with("One thing. GRATEFUL for it all.\n\n"));
    }

    #[test]
    fn test_lone_trigger_sentence_verbatim() {
        let out = format("Thanks for everything you do.");
        assert_eq!(out, "Thanks for everything you do.");
    }
}

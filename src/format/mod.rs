//! Testimonial text formatting.
//!
//! Turns one blob of free text into blank-line separated paragraphs.
//! Sentences are detected with a punctuation heuristic, then grouped until
//! a size cap or trigger phrase closes the paragraph. Pure string-to-string,
//! no I/O.

mod paragraphs;
mod sentences;

pub use paragraphs::{format, MAX_PARAGRAPH_CHARS, MAX_PARAGRAPH_SENTENCES, TRIGGER_PHRASES};
pub use sentences::{normalize_whitespace, split_sentences};

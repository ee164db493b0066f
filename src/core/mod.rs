//! Core domain types
//!
//! Words, letter sets and feedback patterns. Everything here is pure and
//! shared read-only by the scoring workers.

mod letters;
mod pattern;
mod word;

pub use letters::{CandidateLetters, LetterSet};
pub use pattern::{Color, Pattern};
pub use word::{Word, WordError};

//! Constraint derivation
//!
//! Turns a guess plus a hypothesised feedback pattern into the letters still
//! allowed at each position and the letters that must appear somewhere else.
//!
//! Per position:
//! - green: the position keeps only the guessed letter
//! - yellow: the letter is removed from this position and must occur elsewhere
//! - grey: the letter is removed from every position
//!
//! A letter that is grey at one position and green/yellow at another makes
//! the pattern impossible, as does a position left with no letters.

use crate::core::{CandidateLetters, Color, LetterSet, Pattern, Word};
use std::fmt;

/// Constraints consistent with one (guess, pattern) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints<'a> {
    allowed: &'a CandidateLetters,
    required_elsewhere: Vec<u8>,
}

impl Constraints<'_> {
    /// Allowed letters per position
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> &CandidateLetters {
        self.allowed
    }

    /// Yellow letters in guess order; each must occur somewhere in a matching word
    #[inline]
    #[must_use]
    pub fn required_elsewhere(&self) -> &[u8] {
        &self.required_elsewhere
    }

    /// Check whether `word` satisfies these constraints
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.allowed.admits(word.bytes())
            && self
                .required_elsewhere
                .iter()
                .all(|&letter| word.has_letter(letter))
    }
}

/// Why a pattern cannot be produced by a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impossibility {
    /// The letter is marked both absent and present
    Contradiction { letter: u8 },
    /// No letter is left at the position
    ExhaustedCandidates { position: usize },
}

impl fmt::Display for Impossibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { letter } => write!(
                f,
                "Letter '{}' cannot be both grey and non-grey",
                *letter as char
            ),
            Self::ExhaustedCandidates { position } => {
                write!(f, "No letters left for position {position}")
            }
        }
    }
}

impl std::error::Error for Impossibility {}

/// Outcome of deriving constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation<'a> {
    Matched(Constraints<'a>),
    Impossible(Impossibility),
}

impl<'a> Derivation<'a> {
    /// Convert into a `Result`, treating an impossible pattern as an error
    ///
    /// # Errors
    /// Returns the `Impossibility` if the pattern cannot occur.
    pub fn into_result(self) -> Result<Constraints<'a>, Impossibility> {
        match self {
            Self::Matched(constraints) => Ok(constraints),
            Self::Impossible(reason) => Err(reason),
        }
    }
}

/// Letters classified so far while walking a guess
#[derive(Debug, Default)]
struct Tally {
    grey: LetterSet,
    non_grey: LetterSet,
    required_elsewhere: Vec<u8>,
}

impl Tally {
    fn apply(&mut self, candidates: &mut CandidateLetters, position: usize, letter: u8, color: Color) {
        match color {
            Color::Green => {
                self.non_grey.insert(letter);
                candidates.collapse(position, letter);
            }
            Color::Yellow => {
                self.non_grey.insert(letter);
                self.required_elsewhere.push(letter);
                candidates.remove_at(position, letter);
            }
            Color::Grey => {
                self.grey.insert(letter);
                candidates.remove_everywhere(letter);
            }
        }
    }

    fn contradiction(&self) -> Option<u8> {
        self.grey.intersection(self.non_grey).iter().next()
    }
}

/// Derive the constraints implied by `pattern` being the feedback for `guess`
///
/// `candidates` is the caller's private snapshot; it is narrowed in place and
/// borrowed by the returned constraints.
///
/// # Panics
/// Panics if `guess`, `pattern` and `candidates` differ in length
///
/// # Examples
/// ```
/// use wordle_openers::core::{CandidateLetters, Pattern, Word};
/// use wordle_openers::scoring::{Derivation, derive};
///
/// let guess = Word::new("ocean", 5).unwrap();
/// let pattern = Pattern::from_str("GG-GG").unwrap();
/// let mut candidates = CandidateLetters::full(5);
///
/// let Derivation::Matched(constraints) = derive(&guess, &pattern, &mut candidates) else {
///     panic!("pattern is possible");
/// };
/// assert!(constraints.matches(&Word::new("octan", 5).unwrap()));
/// assert!(!constraints.matches(&Word::new("ocean", 5).unwrap()));
/// ```
pub fn derive<'a>(
    guess: &Word,
    pattern: &Pattern,
    candidates: &'a mut CandidateLetters,
) -> Derivation<'a> {
    assert_eq!(guess.len(), pattern.len(), "guess/pattern length mismatch");
    assert_eq!(guess.len(), candidates.len(), "guess/candidates length mismatch");

    let mut tally = Tally::default();
    for (position, (&letter, &color)) in guess.bytes().iter().zip(pattern.colors()).enumerate() {
        tally.apply(candidates, position, letter, color);
    }

    if let Some(letter) = tally.contradiction() {
        return Derivation::Impossible(Impossibility::Contradiction { letter });
    }
    if let Some(position) = candidates.first_exhausted() {
        return Derivation::Impossible(Impossibility::ExhaustedCandidates { position });
    }

    Derivation::Matched(Constraints {
        allowed: candidates,
        required_elsewhere: tally.required_elsewhere,
    })
}

//! Expected information of a guess
//!
//! For every feedback pattern, the frequency mass of the corpus words
//! consistent with it gives a probability p. The guess scores
//!
//! H = Σ p * log₂(1/p)
//!
//! over all patterns with p > 0. Impossible patterns contribute nothing.

use super::config::ScoringConfig;
use super::constraints::{Derivation, derive};
use super::filter::matched_mass;
use crate::core::{CandidateLetters, Pattern, Word};
use crate::corpus::Corpus;

/// Entropy contribution `p * log₂(1/p)` of a pattern holding `mass` out of `total`
///
/// Returns exactly 0.0 when either value is 0.
///
/// # Examples
/// ```
/// use wordle_openers::scoring::information;
///
/// assert!((information(1, 2) - 0.5).abs() < 1e-12);
/// assert_eq!(information(0, 10), 0.0);
/// assert_eq!(information(10, 10), 0.0);
/// ```
#[must_use]
pub fn information(mass: u64, total: u64) -> f64 {
    if mass == 0 || total == 0 {
        return 0.0;
    }
    let p = mass as f64 / total as f64;
    p * (1.0 / p).log2()
}

/// Expected information (bits) of playing `guess` against `corpus`
///
/// A corpus with zero total frequency scores 0.0 for every guess.
///
/// # Examples
/// ```
/// use wordle_openers::core::Word;
/// use wordle_openers::corpus::Corpus;
/// use wordle_openers::scoring::{ScoringConfig, expected_information};
///
/// let corpus = Corpus::from_pairs(5, [("slate", 1), ("zzzzz", 1)]).unwrap();
/// let config = ScoringConfig::new(5).unwrap();
/// let guess = Word::new("slate", 5).unwrap();
///
/// // Perfect binary split = 1 bit
/// let bits = expected_information(&guess, &corpus, &config);
/// assert!((bits - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_information(guess: &Word, corpus: &Corpus, config: &ScoringConfig) -> f64 {
    let total = corpus.total_mass();
    if total == 0 {
        return 0.0;
    }

    let template = CandidateLetters::full(config.word_length());
    config
        .patterns()
        .iter()
        .map(|pattern| {
            let mut candidates = template.clone();
            match derive(guess, pattern, &mut candidates) {
                Derivation::Matched(constraints) => {
                    let (_, mass) = matched_mass(&constraints, corpus);
                    information(mass, total)
                }
                Derivation::Impossible(_) => 0.0,
            }
        })
        .sum()
}

/// How one pattern splits the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct PatternOutcome {
    pub pattern: Pattern,
    /// Number of corpus words consistent with the pattern
    pub words: usize,
    /// Total frequency of those words
    pub mass: u64,
    pub probability: f64,
    /// Entropy contribution in bits
    pub information: f64,
}

/// Per-pattern view of a guess
#[derive(Debug, Clone)]
pub struct PatternBreakdown {
    /// Patterns matching at least one word, in enumeration order
    pub outcomes: Vec<PatternOutcome>,
    /// Patterns the guess can never produce
    pub impossible: usize,
    /// Possible patterns that match no corpus word
    pub unmatched: usize,
}

impl PatternBreakdown {
    /// Sum of the entropy contributions
    #[must_use]
    pub fn expected_information(&self) -> f64 {
        self.outcomes.iter().map(|o| o.information).sum()
    }

    /// Outcomes sorted by probability, largest first
    #[must_use]
    pub fn by_probability(&self) -> Vec<&PatternOutcome> {
        let mut sorted: Vec<&PatternOutcome> = self.outcomes.iter().collect();
        sorted.sort_by(|a, b| b.mass.cmp(&a.mass).then(a.pattern.index().cmp(&b.pattern.index())));
        sorted
    }
}

/// Break the score of `guess` down by pattern
#[must_use]
pub fn pattern_breakdown(guess: &Word, corpus: &Corpus, config: &ScoringConfig) -> PatternBreakdown {
    let total = corpus.total_mass();
    let mut breakdown = PatternBreakdown {
        outcomes: Vec::new(),
        impossible: 0,
        unmatched: 0,
    };

    for pattern in config.patterns() {
        let mut candidates = CandidateLetters::full(config.word_length());
        let Derivation::Matched(constraints) = derive(guess, pattern, &mut candidates) else {
            breakdown.impossible += 1;
            continue;
        };

        let (words, mass) = matched_mass(&constraints, corpus);
        if words == 0 {
            breakdown.unmatched += 1;
            continue;
        }

        let probability = if total == 0 {
            0.0
        } else {
            mass as f64 / total as f64
        };
        breakdown.outcomes.push(PatternOutcome {
            pattern: pattern.clone(),
            words,
            mass,
            probability,
            information: information(mass, total),
        });
    }

    breakdown
}

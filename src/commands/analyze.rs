//! Word analysis command
//!
//! Breaks down the expected information of a single opening guess by pattern.

use crate::core::Word;
use crate::corpus::Corpus;
use crate::scoring::{PatternBreakdown, ScoringConfig, pattern_breakdown};
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub expected_information: f64,
    /// Frequency of the word, if it is in the corpus
    pub frequency: Option<u64>,
    /// Frequency-weighted expected number of words left after the guess
    pub expected_remaining: f64,
    /// Chance that the guess is the answer
    pub solve_probability: f64,
    pub total_words: usize,
    pub total_mass: u64,
    pub breakdown: PatternBreakdown,
}

/// Analyze a guess against the corpus
///
/// The word does not have to be in the corpus, but must have the configured length.
///
/// # Errors
///
/// Returns an error if the word is not a valid word of the configured length.
pub fn analyze_word(word: &str, corpus: &Corpus, config: &ScoringConfig) -> Result<AnalysisResult> {
    let guess = Word::new(word, config.word_length()).with_context(|| format!("Invalid word '{word}'"))?;

    let breakdown = pattern_breakdown(&guess, corpus, config);
    let expected_remaining = breakdown
        .outcomes
        .iter()
        .map(|o| o.probability * o.words as f64)
        .sum();
    let solve_probability = breakdown
        .outcomes
        .iter()
        .find(|o| o.pattern.is_perfect())
        .map_or(0.0, |o| o.probability);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        expected_information: breakdown.expected_information(),
        frequency: corpus.frequency(guess.text()),
        expected_remaining,
        solve_probability,
        total_words: corpus.len(),
        total_mass: corpus.total_mass(),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::sample_corpus;
    use crate::scoring::expected_information;

    #[test]
    fn analyze_corpus_word() {
        let corpus = sample_corpus().unwrap();
        let config = ScoringConfig::new(5).unwrap();

        let result = analyze_word("SALET", &corpus, &config).unwrap();
        assert_eq!(result.word, "salet");
        assert_eq!(result.frequency, corpus.frequency("salet"));
        assert_eq!(result.total_words, corpus.len());

        let direct = expected_information(corpus.word("salet").unwrap(), &corpus, &config);
        assert!((result.expected_information - direct).abs() < 1e-9);

        let own_share = corpus.frequency("salet").unwrap() as f64 / corpus.total_mass() as f64;
        assert!((result.solve_probability - own_share).abs() < 1e-12);
    }

    #[test]
    fn analyze_word_outside_corpus() {
        let corpus = sample_corpus().unwrap();
        let config = ScoringConfig::new(5).unwrap();

        let result = analyze_word("tares", &corpus, &config).unwrap();
        assert_eq!(result.frequency, None);
        assert!(result.expected_information > 0.0);
        assert!(result.solve_probability.abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_invalid_word() {
        let corpus = sample_corpus().unwrap();
        let config = ScoringConfig::new(5).unwrap();

        assert!(analyze_word("cranes", &corpus, &config).is_err());
        assert!(analyze_word("cr4ne", &corpus, &config).is_err());
    }

    #[test]
    fn expected_remaining_is_sensible() {
        let corpus = sample_corpus().unwrap();
        let config = ScoringConfig::new(5).unwrap();

        // Distinct letters: the patterns partition the corpus
        let result = analyze_word("crane", &corpus, &config).unwrap();
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= corpus.len() as f64);
    }
}

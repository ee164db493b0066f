//! Candidate filtering
//!
//! Restricts a corpus to the words consistent with derived constraints.

use super::constraints::{Constraints, Derivation, derive};
use crate::core::{CandidateLetters, Pattern, Word};
use crate::corpus::Corpus;

/// Words (with frequencies) that satisfy `constraints`, in corpus order
#[must_use]
pub fn filter<'c>(constraints: &Constraints<'_>, corpus: &'c Corpus) -> Vec<(&'c Word, u64)> {
    corpus
        .iter()
        .filter(|(word, _)| constraints.matches(word))
        .collect()
}

/// Total frequency of the words that satisfy `constraints`, with the match count
#[must_use]
pub fn matched_mass(constraints: &Constraints<'_>, corpus: &Corpus) -> (usize, u64) {
    corpus
        .iter()
        .filter(|(word, _)| constraints.matches(word))
        .fold((0, 0), |(count, mass), (_, frequency)| {
            (count + 1, mass + frequency)
        })
}

/// Words consistent with `guess` receiving `pattern`
///
/// Derives constraints on a fresh candidate snapshot; an impossible pattern
/// yields an empty subset.
///
/// # Examples
/// ```
/// use wordle_openers::core::{Pattern, Word};
/// use wordle_openers::corpus::Corpus;
/// use wordle_openers::scoring::guess_filter;
///
/// let corpus = Corpus::from_pairs(5, [("ocean", 9), ("octan", 1), ("slate", 4)]).unwrap();
/// let guess = Word::new("ocean", 5).unwrap();
///
/// let exact = guess_filter(&guess, &Pattern::from_codes(&[0, 0, 0, 0, 0]).unwrap(), &corpus);
/// assert_eq!(exact.len(), 1);
/// assert_eq!(exact[0].0.text(), "ocean");
/// ```
#[must_use]
pub fn guess_filter<'c>(guess: &Word, pattern: &Pattern, corpus: &'c Corpus) -> Vec<(&'c Word, u64)> {
    let mut candidates = CandidateLetters::full(guess.len());
    match derive(guess, pattern, &mut candidates) {
        Derivation::Matched(constraints) => filter(&constraints, corpus),
        Derivation::Impossible(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::sample_corpus;

    fn texts(subset: &[(&Word, u64)]) -> Vec<String> {
        subset.iter().map(|(w, _)| w.text().to_string()).collect()
    }

    fn codes(codes: &[u8]) -> Pattern {
        Pattern::from_codes(codes).unwrap()
    }

    fn ocean() -> Word {
        Word::new("ocean", 5).unwrap()
    }

    #[test]
    fn all_green_returns_the_guess_only() {
        let corpus = sample_corpus().unwrap();
        let subset = guess_filter(&ocean(), &codes(&[0, 0, 0, 0, 0]), &corpus);

        assert_eq!(texts(&subset), ["ocean"]);
        assert_eq!(subset[0].1, corpus.frequency("ocean").unwrap());
    }

    #[test]
    fn grey_middle_letter_finds_octan() {
        let corpus = sample_corpus().unwrap();
        let subset = guess_filter(&ocean(), &codes(&[0, 0, 2, 0, 0]), &corpus);
        assert_eq!(texts(&subset), ["octan"]);
    }

    #[test]
    fn yellow_with_every_other_position_fixed_is_empty() {
        let corpus = sample_corpus().unwrap();
        let subset = guess_filter(&ocean(), &codes(&[0, 0, 1, 0, 0]), &corpus);
        assert!(subset.is_empty());
    }

    #[test]
    fn impossible_pattern_yields_empty_subset() {
        let corpus = sample_corpus().unwrap();
        let geese = Word::new("geese", 5).unwrap();
        let subset = guess_filter(&geese, &codes(&[0, 2, 0, 0, 0]), &corpus);
        assert!(subset.is_empty());
    }

    #[test]
    fn subset_preserves_corpus_order() {
        let corpus =
            Corpus::from_pairs(5, [("slate", 1), ("crane", 2), ("plant", 3), ("irate", 4)])
                .unwrap();
        // Every word has 'a' at position 2
        let guess = Word::new("zzazz", 5).unwrap();
        let subset = guess_filter(&guess, &Pattern::from_str("--G--").unwrap(), &corpus);
        assert_eq!(texts(&subset), ["slate", "crane", "plant", "irate"]);

        // g, r, p excluded; a and e pinned
        let guess = Word::new("grape", 5).unwrap();
        let subset = guess_filter(&guess, &Pattern::from_str("--G-G").unwrap(), &corpus);
        assert_eq!(texts(&subset), ["slate"]);
    }

    #[test]
    fn matched_mass_agrees_with_filter() {
        let corpus = sample_corpus().unwrap();
        let guess = Word::new("slate", 5).unwrap();

        for pattern in Pattern::all(5) {
            let mut candidates = CandidateLetters::full(5);
            if let Derivation::Matched(constraints) = derive(&guess, &pattern, &mut candidates) {
                let subset = filter(&constraints, &corpus);
                let (count, mass) = matched_mass(&constraints, &corpus);
                assert_eq!(count, subset.len());
                assert_eq!(mass, subset.iter().map(|(_, f)| f).sum::<u64>());
            }
        }
    }

    #[test]
    fn guess_always_survives_its_own_all_green_pattern() {
        let corpus = sample_corpus().unwrap();
        let perfect = codes(&[0, 0, 0, 0, 0]);

        for word in corpus.words() {
            let subset = guess_filter(word, &perfect, &corpus);
            assert_eq!(texts(&subset), [word.text()]);
        }
    }

    #[test]
    fn answer_survives_its_feedback_for_distinct_letter_guesses() {
        let corpus = sample_corpus().unwrap();
        let guesses = ["crane", "slate", "adieu", "nymph", "fjord"];

        for guess in guesses.map(|g| Word::new(g, 5).unwrap()) {
            for answer in corpus.words() {
                let pattern = Pattern::calculate(&guess, answer);
                let subset = guess_filter(&guess, &pattern, &corpus);
                assert!(
                    subset.iter().any(|(w, _)| *w == answer),
                    "{answer} missing for {guess} {pattern}"
                );
            }
        }
    }
}

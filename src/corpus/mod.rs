//! Word corpus with frequencies
//!
//! The corpus is an ordered word -> frequency mapping. Iteration follows
//! insertion order, which the score table and its output preserve.

pub mod loader;
mod sample;

pub use sample::{SAMPLE_FREQUENCIES, SAMPLE_WORDS, sample_corpus};

use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::PathBuf;

/// Error raised while building or loading a corpus
#[derive(Debug)]
pub enum CorpusError {
    /// A word list entry is not a valid word of the configured length
    InvalidWord {
        line: usize,
        word: String,
        source: WordError,
    },
    /// A frequency row could not be parsed
    MalformedFrequency { line: usize, row: String },
    /// Adding a word's frequency pushed the corpus total past `u64::MAX`
    MassOverflow { line: usize, word: String },
    /// A file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { line, word, source } => {
                write!(f, "line {line}: invalid word '{word}': {source}")
            }
            Self::MalformedFrequency { line, row } => {
                write!(f, "line {line}: malformed frequency row '{row}'")
            }
            Self::MassOverflow { line, word } => {
                write!(f, "line {line}: frequency of '{word}' overflows the corpus total")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::MalformedFrequency { .. } | Self::MassOverflow { .. } => None,
        }
    }
}

/// The corpus total would exceed `u64::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MassOverflow;

impl fmt::Display for MassOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corpus frequency total overflows u64")
    }
}

impl std::error::Error for MassOverflow {}

/// Ordered word -> frequency mapping
///
/// Words are unique and all share the corpus word length.
#[derive(Debug, Clone)]
pub struct Corpus {
    word_length: usize,
    entries: Vec<(Word, u64)>,
    index: FxHashMap<String, usize>,
    total_mass: u64,
}

impl Corpus {
    /// Create an empty corpus for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            entries: Vec::new(),
            index: FxHashMap::default(),
            total_mass: 0,
        }
    }

    /// Build a corpus from `(word, frequency)` pairs
    ///
    /// Duplicate words keep their first position and first frequency.
    ///
    /// # Errors
    /// Returns `CorpusError::InvalidWord` (with a 1-based entry number) for the
    /// first entry that is not a valid word of `word_length` letters, or
    /// `CorpusError::MassOverflow` if the frequencies sum past `u64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::corpus::Corpus;
    ///
    /// let corpus = Corpus::from_pairs(5, [("ocean", 10), ("octan", 2)]).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.total_mass(), 12);
    /// assert!(Corpus::from_pairs(5, [("sea", 1)]).is_err());
    /// ```
    pub fn from_pairs<'a, I>(word_length: usize, pairs: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut corpus = Self::new(word_length);
        for (line, (text, frequency)) in pairs.into_iter().enumerate() {
            let word = Word::new(text, word_length).map_err(|source| CorpusError::InvalidWord {
                line: line + 1,
                word: text.to_string(),
                source,
            })?;
            corpus
                .insert(word, frequency)
                .map_err(|MassOverflow| CorpusError::MassOverflow {
                    line: line + 1,
                    word: text.to_string(),
                })?;
        }
        Ok(corpus)
    }

    /// Add a word; returns `Ok(false)` (and changes nothing) if it is already present
    ///
    /// # Errors
    /// Returns `MassOverflow`, leaving the corpus unchanged, if the new total
    /// would exceed `u64::MAX`.
    ///
    /// # Panics
    /// Panics in debug mode if the word length differs from the corpus word length
    pub fn insert(&mut self, word: Word, frequency: u64) -> Result<bool, MassOverflow> {
        debug_assert_eq!(word.len(), self.word_length, "word length mismatch");

        if self.index.contains_key(word.text()) {
            return Ok(false);
        }
        self.total_mass = self.total_mass.checked_add(frequency).ok_or(MassOverflow)?;
        self.index.insert(word.text().to_string(), self.entries.len());
        self.entries.push((word, frequency));
        Ok(true)
    }

    /// Replace the frequency of an existing word; returns `Ok(false)` if the word is unknown
    ///
    /// # Errors
    /// Returns `MassOverflow`, leaving the corpus unchanged, if the new total
    /// would exceed `u64::MAX`.
    pub fn set_frequency(&mut self, word: &str, frequency: u64) -> Result<bool, MassOverflow> {
        let Some(&i) = self.index.get(word) else {
            return Ok(false);
        };
        let slot = &mut self.entries[i].1;
        // The old frequency is part of the total, so the subtraction cannot underflow
        self.total_mass = (self.total_mass - *slot)
            .checked_add(frequency)
            .ok_or(MassOverflow)?;
        *slot = frequency;
        Ok(true)
    }

    /// Frequency of `word`, if present
    #[must_use]
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Look up the stored `Word` for a string
    #[must_use]
    pub fn word(&self, word: &str) -> Option<&Word> {
        self.index.get(word).map(|&i| &self.entries[i].0)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Restrict the corpus to the listed words, in the listed order
    ///
    /// Unknown words are skipped.
    #[must_use]
    pub fn subset(&self, words: &[&str]) -> Self {
        let mut subset = Self::new(self.word_length);
        for &text in words {
            let Some(&i) = self.index.get(text) else {
                continue;
            };
            if subset.index.contains_key(text) {
                continue;
            }
            let (word, frequency) = &self.entries[i];
            subset.index.insert(text.to_string(), subset.entries.len());
            subset.entries.push((word.clone(), *frequency));
            // Bounded by this corpus's total
            subset.total_mass += frequency;
        }
        subset
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Sum of all frequencies
    #[inline]
    #[must_use]
    pub const fn total_mass(&self) -> u64 {
        self.total_mass
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.entries.iter().map(|(word, frequency)| (word, *frequency))
    }

    /// Words in corpus order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(word, _)| word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_preserves_order_and_mass() {
        let corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 5), ("irate", 0)]).unwrap();

        let words: Vec<&str> = corpus.words().map(Word::text).collect();
        assert_eq!(words, ["slate", "crane", "irate"]);
        assert_eq!(corpus.total_mass(), 8);
        assert_eq!(corpus.frequency("irate"), Some(0));
        assert_eq!(corpus.frequency("zzzzz"), None);
    }

    #[test]
    fn duplicates_keep_first_entry() {
        let corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 5), ("slate", 9)]).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.frequency("slate"), Some(3));
        assert_eq!(corpus.total_mass(), 8);
    }

    #[test]
    fn from_pairs_reports_bad_entry() {
        let err = Corpus::from_pairs(5, [("slate", 1), ("cat", 1)]).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidWord { line: 2, .. }));
        assert!(err.to_string().contains("'cat'"));
    }

    #[test]
    fn set_frequency_updates_mass() {
        let mut corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 5)]).unwrap();
        assert_eq!(corpus.set_frequency("slate", 10), Ok(true));
        assert_eq!(corpus.total_mass(), 15);
        assert_eq!(corpus.set_frequency("irate", 1), Ok(false));
        assert_eq!(corpus.total_mass(), 15);
    }

    #[test]
    fn set_frequency_rejects_overflowing_total() {
        let mut corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 5)]).unwrap();
        assert_eq!(corpus.set_frequency("slate", u64::MAX), Err(MassOverflow));
        assert_eq!(corpus.frequency("slate"), Some(3));
        assert_eq!(corpus.total_mass(), 8);

        // Replacing a word's own share of the total is fine
        assert_eq!(corpus.set_frequency("slate", u64::MAX - 5), Ok(true));
        assert_eq!(corpus.total_mass(), u64::MAX);
    }

    #[test]
    fn from_pairs_reports_overflowing_total() {
        let err = Corpus::from_pairs(5, [("slate", u64::MAX), ("crane", 0), ("irate", 1)]).unwrap_err();
        assert!(matches!(err, CorpusError::MassOverflow { line: 3, ref word } if word == "irate"));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn subset_keeps_requested_order() {
        let corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 5), ("irate", 7)]).unwrap();
        let subset = corpus.subset(&["irate", "slate", "zzzzz"]);

        let words: Vec<&str> = subset.words().map(Word::text).collect();
        assert_eq!(words, ["irate", "slate"]);
        assert_eq!(subset.total_mass(), 10);
    }

    #[test]
    fn lookup() {
        let corpus = Corpus::from_pairs(5, [("slate", 3)]).unwrap();
        let word = corpus.word("slate").unwrap();
        assert_eq!(word.text(), "slate");
        assert!(corpus.contains("slate"));
        assert!(corpus.word("crane").is_none());
        assert_eq!(corpus.iter().next(), Some((word, 3)));
    }
}

//! Embedded sample corpus
//!
//! A small five-letter corpus compiled into the binary by the build script.
//!
//! The counts in `data/sample_frequencies.csv` are illustrative, not taken
//! from a real frequency table. They are chosen so the demo and the tests
//! have a realistic spread of common and rare words.

use super::{Corpus, CorpusError, MassOverflow};

// Include generated sample data from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));

/// Build the embedded sample corpus (five-letter words)
///
/// # Errors
///
/// Returns an error only if the embedded data is malformed.
///
/// # Examples
/// ```
/// use wordle_openers::corpus::sample_corpus;
///
/// let corpus = sample_corpus().unwrap();
/// assert_eq!(corpus.frequency("ocean"), Some(25_693_497));
/// ```
pub fn sample_corpus() -> Result<Corpus, CorpusError> {
    let mut corpus = Corpus::from_pairs(5, SAMPLE_WORDS.iter().map(|&word| (word, 0)))?;
    for (line, &(word, frequency)) in SAMPLE_FREQUENCIES.iter().enumerate() {
        corpus
            .set_frequency(word, frequency)
            .map_err(|MassOverflow| CorpusError::MassOverflow {
                line: line + 2,
                word: word.to_string(),
            })?;
    }
    Ok(corpus)
}

//! Corpus loading
//!
//! A corpus is built from two files: a word list (one word per line) and a
//! frequency table (CSV with a header line, then `word,frequency` rows).
//! Listed words missing from the frequency table get frequency 0; frequency
//! rows for words outside the list are ignored.

use super::{Corpus, CorpusError, MassOverflow, sample_corpus};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Path value that selects the embedded sample corpus
pub const SAMPLE: &str = "sample";

/// Parse a word list into a corpus with every frequency set to 0
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns `CorpusError::InvalidWord` for the first line that is not a word of
/// `word_length` letters.
///
/// # Examples
/// ```
/// use wordle_openers::corpus::loader::parse_word_list;
///
/// let corpus = parse_word_list("ocean\n\n  octan\n", 5).unwrap();
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.total_mass(), 0);
/// ```
pub fn parse_word_list(content: &str, word_length: usize) -> Result<Corpus, CorpusError> {
    let mut corpus = Corpus::new(word_length);

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed, word_length).map_err(|source| CorpusError::InvalidWord {
            line: i + 1,
            word: trimmed.to_string(),
            source,
        })?;
        corpus
            .insert(word, 0)
            .map_err(|MassOverflow| CorpusError::MassOverflow {
                line: i + 1,
                word: trimmed.to_string(),
            })?;
    }

    Ok(corpus)
}

/// Apply a frequency table to the words already in `corpus`
///
/// The first line is a header and is skipped. Returns the number of corpus
/// words that received a frequency.
///
/// # Errors
///
/// Returns `CorpusError::MalformedFrequency` for a row without a comma or with
/// a frequency that is not a non-negative integer, and
/// `CorpusError::MassOverflow` if the frequencies sum past `u64::MAX`.
pub fn apply_frequencies(corpus: &mut Corpus, content: &str) -> Result<usize, CorpusError> {
    let mut applied = 0;

    for (i, line) in content.lines().enumerate().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let malformed = || CorpusError::MalformedFrequency {
            line: i + 1,
            row: trimmed.to_string(),
        };

        let (word, frequency) = trimmed.split_once(',').ok_or_else(malformed)?;
        let frequency: u64 = frequency.trim().parse().map_err(|_| malformed())?;

        let word = word.trim();
        let known = corpus
            .set_frequency(word, frequency)
            .map_err(|MassOverflow| CorpusError::MassOverflow {
                line: i + 1,
                word: word.to_string(),
            })?;
        if known {
            applied += 1;
        }
    }

    Ok(applied)
}

fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a corpus from a word list file and a frequency CSV file
///
/// # Errors
///
/// Returns an error if either file cannot be read or contains malformed entries.
///
/// # Examples
/// ```no_run
/// use wordle_openers::corpus::loader::load_corpus;
///
/// let corpus = load_corpus("data/wordle_list.txt", "data/unigram_freq.csv", 5).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_corpus<P, Q>(words: P, frequencies: Q, word_length: usize) -> Result<Corpus, CorpusError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut corpus = parse_word_list(&read(words.as_ref())?, word_length)?;
    apply_frequencies(&mut corpus, &read(frequencies.as_ref())?)?;
    Ok(corpus)
}

/// Load a corpus, treating a word list path of `sample` as the embedded sample corpus
///
/// # Errors
///
/// Returns an error if loading fails, or if the sample corpus is requested for
/// a word length other than 5.
pub fn load_corpus_or_sample(
    words: &str,
    frequencies: &Path,
    word_length: usize,
) -> Result<Corpus, CorpusError> {
    if words == SAMPLE {
        let corpus = sample_corpus()?;
        if corpus.word_length() != word_length {
            // Re-validate against the requested length to get a precise error
            return Corpus::from_pairs(word_length, corpus.iter().map(|(w, f)| (w.text(), f)));
        }
        Ok(corpus)
    } else {
        load_corpus(words, frequencies, word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_word_list_skips_blank_lines() {
        let corpus = parse_word_list("crane\n\n slate \n", 5).unwrap();
        let words: Vec<&str> = corpus.words().map(Word::text).collect();
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn parse_word_list_rejects_wrong_length() {
        let err = parse_word_list("crane\ncranes\n", 5).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidWord { line: 2, .. }));
    }

    #[test]
    fn parse_word_list_rejects_non_alphabetic() {
        let err = parse_word_list("cr4ne\n", 5).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidWord { line: 1, .. }));
    }

    #[test]
    fn frequencies_join_by_exact_word() {
        let mut corpus = parse_word_list("crane\nslate\nirate\n", 5).unwrap();
        let applied = apply_frequencies(
            &mut corpus,
            "word,count\nthe,1000\ncrane,40\nslate,7\ncranes,3\n",
        )
        .unwrap();

        assert_eq!(applied, 2);
        assert_eq!(corpus.frequency("crane"), Some(40));
        assert_eq!(corpus.frequency("slate"), Some(7));
        assert_eq!(corpus.frequency("irate"), Some(0));
        assert_eq!(corpus.total_mass(), 47);
    }

    #[test]
    fn frequency_header_is_skipped() {
        let mut corpus = parse_word_list("crane\n", 5).unwrap();
        // A header that happens to look like a row is still skipped
        apply_frequencies(&mut corpus, "crane,5\n").unwrap();
        assert_eq!(corpus.frequency("crane"), Some(0));
    }

    #[test]
    fn malformed_frequency_rows_fail() {
        let mut corpus = parse_word_list("crane\n", 5).unwrap();

        let err = apply_frequencies(&mut corpus, "word,count\ncrane\n").unwrap_err();
        assert!(matches!(err, CorpusError::MalformedFrequency { line: 2, .. }));

        let err = apply_frequencies(&mut corpus, "word,count\ncrane,-4\n").unwrap_err();
        assert!(matches!(err, CorpusError::MalformedFrequency { line: 2, .. }));
    }

    #[test]
    fn frequency_total_overflow_is_an_error() {
        let mut corpus = parse_word_list("crane\nslate\n", 5).unwrap();
        let err = apply_frequencies(
            &mut corpus,
            "word,count\ncrane,18446744073709551615\nslate,5\n",
        )
        .unwrap_err();

        assert!(matches!(err, CorpusError::MassOverflow { line: 3, ref word } if word == "slate"));
        assert_eq!(corpus.frequency("slate"), Some(0));
        assert_eq!(corpus.total_mass(), u64::MAX);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_corpus("does/not/exist.txt", "nope.csv", 5).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn sample_path_loads_embedded_corpus() {
        let corpus = load_corpus_or_sample(SAMPLE, Path::new("ignored.csv"), 5).unwrap();
        assert_eq!(corpus.len(), crate::corpus::SAMPLE_WORDS.len());
    }

    #[test]
    fn sample_path_rejects_other_lengths() {
        let err = load_corpus_or_sample(SAMPLE, Path::new("ignored.csv"), 6).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidWord { .. }));
    }
}

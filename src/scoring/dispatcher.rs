//! Parallel scoring of a whole corpus
//!
//! The corpus is split into contiguous chunks, one per worker. Each worker
//! scores its chunk into a private buffer; buffers are merged by corpus
//! index once every worker is done.

use super::calculator::expected_information;
use super::config::ScoringConfig;
use super::table::{ScoreTable, ScoredWord};
use crate::core::Word;
use crate::corpus::Corpus;
use rayon::prelude::*;
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use std::fmt;
use std::ops::Range;

/// Error type for corpus scoring
#[derive(Debug)]
pub enum DispatchError {
    /// Corpus words are not the configured length
    LengthMismatch { corpus: usize, config: usize },
    /// The worker pool could not be created
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { corpus, config } => write!(
                f,
                "Corpus has {corpus}-letter words but scoring is configured for {config} letters"
            ),
            Self::ThreadPool(e) => write!(f, "Failed to start worker pool: {e}"),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

/// Split `len` items into at most `workers` contiguous ranges
///
/// Range sizes differ by at most one; the last `len % workers` ranges take
/// the extra item. Never returns empty ranges.
///
/// # Examples
/// ```
/// use wordle_openers::scoring::partition;
///
/// assert_eq!(partition(10, 4), vec![0..2, 2..4, 4..7, 7..10]);
/// assert_eq!(partition(2, 8), vec![0..1, 1..2]);
/// assert!(partition(0, 4).is_empty());
/// ```
#[must_use]
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, len);
    let base = len / workers;
    let extra = len % workers;

    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let size = base + usize::from(i >= workers - extra);
        chunks.push(start..start + size);
        start += size;
    }
    chunks
}

/// Score every corpus word on `config.workers()` threads
///
/// `on_start` is called once per word, from the worker thread, just before
/// the word is scored.
///
/// # Errors
///
/// Returns an error if the corpus word length does not match the
/// configuration or the worker pool cannot be built.
///
/// # Examples
/// ```
/// use wordle_openers::corpus::Corpus;
/// use wordle_openers::scoring::{ScoringConfig, score_corpus};
///
/// let corpus = Corpus::from_pairs(5, [("slate", 1), ("zzzzz", 1)]).unwrap();
/// let config = ScoringConfig::new(5).unwrap().with_workers(2);
///
/// let table = score_corpus(&corpus, &config, |_| {}).unwrap();
/// assert_eq!(table.len(), 2);
/// assert!((table.get("slate").unwrap() - 1.0).abs() < 1e-9);
/// ```
pub fn score_corpus<F>(
    corpus: &Corpus,
    config: &ScoringConfig,
    on_start: F,
) -> Result<ScoreTable, DispatchError>
where
    F: Fn(&Word) + Sync,
{
    if corpus.word_length() != config.word_length() {
        return Err(DispatchError::LengthMismatch {
            corpus: corpus.word_length(),
            config: config.word_length(),
        });
    }

    let chunks = partition(corpus.len(), config.workers().get());
    if chunks.is_empty() {
        return Ok(ScoreTable::default());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .thread_name(|i| format!("scorer-{i}"))
        .build()
        .map_err(DispatchError::ThreadPool)?;

    let partials: Vec<Vec<(usize, f64)>> = pool.install(|| {
        chunks
            .into_par_iter()
            .map(|range| score_chunk(corpus, config, range, &on_start))
            .collect()
    });

    Ok(merge(corpus, partials))
}

fn score_chunk<F>(
    corpus: &Corpus,
    config: &ScoringConfig,
    range: Range<usize>,
    on_start: &F,
) -> Vec<(usize, f64)>
where
    F: Fn(&Word),
{
    corpus
        .iter()
        .enumerate()
        .skip(range.start)
        .take(range.len())
        .map(|(i, (word, _))| {
            on_start(word);
            (i, expected_information(word, corpus, config))
        })
        .collect()
}

// Chunks cover disjoint indices, so every slot is written exactly once
fn merge(corpus: &Corpus, partials: Vec<Vec<(usize, f64)>>) -> ScoreTable {
    let mut scores = vec![0.0; corpus.len()];
    for (i, score) in partials.into_iter().flatten() {
        scores[i] = score;
    }

    let rows = corpus
        .iter()
        .zip(scores)
        .map(|((word, frequency), expected_information)| ScoredWord {
            word: word.clone(),
            expected_information,
            frequency,
        })
        .collect();

    ScoreTable::from_rows(rows)
}

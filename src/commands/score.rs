//! Score command
//!
//! Scores every corpus word as an opening guess and saves the table.

use crate::corpus::Corpus;
use crate::output::progress::{ProgressLog, terminal_bar};
use crate::output::table::save_tsv;
use crate::scoring::{ScoreTable, ScoringConfig, score_corpus};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Options for a scoring run
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    /// Where to write the TSV table (not written if `None`)
    pub output: Option<PathBuf>,
    /// Where to write per-word progress lines (not written if `None`)
    pub log: Option<PathBuf>,
    /// Write rows by descending score instead of corpus order
    pub ranked: bool,
    /// Show the terminal progress bar
    pub show_progress: bool,
}

/// Result of a scoring run
pub struct ScoreResult {
    pub table: ScoreTable,
    pub duration: Duration,
    pub words_per_second: f64,
    pub workers: usize,
}

/// Score the corpus and save the table
///
/// # Errors
///
/// Returns an error if the progress log or output file cannot be written, or
/// if scoring cannot start.
pub fn run_score(corpus: &Corpus, config: &ScoringConfig, options: &ScoreOptions) -> Result<ScoreResult> {
    let bar = if options.show_progress {
        terminal_bar(corpus.len())
    } else {
        ProgressBar::hidden()
    };
    let progress =
        ProgressLog::new(bar, options.log.as_deref()).context("creating progress log")?;

    let start = Instant::now();
    let table = score_corpus(corpus, config, |word| progress.record(word))?;
    let duration = start.elapsed();
    progress.finish().context("flushing progress log")?;

    if let Some(path) = &options.output {
        save_tsv(&table, path, options.ranked)
            .with_context(|| format!("writing score table {}", path.display()))?;
    }

    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        table.len() as f64 / duration.as_secs_f64()
    };

    Ok(ScoreResult {
        table,
        duration,
        words_per_second,
        workers: config.workers().get().min(corpus.len().max(1)),
    })
}

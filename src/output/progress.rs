//! Scoring progress
//!
//! One line per guess word as it starts scoring, written to an optional log
//! file, plus a terminal progress bar.

use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use time::OffsetDateTime;
use time::macros::format_description;

/// Progress sink shared by all scoring workers
pub struct ProgressLog {
    bar: ProgressBar,
    sink: Option<Mutex<BufWriter<File>>>,
}

impl ProgressLog {
    /// Create a progress log; `log_path` (if any) is truncated, and its parent
    /// directory created
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log file cannot be created.
    pub fn new(bar: ProgressBar, log_path: Option<&Path>) -> io::Result<Self> {
        let sink = match log_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Some(Mutex::new(BufWriter::new(File::create(path)?)))
            }
            None => None,
        };

        Ok(Self { bar, sink })
    }

    /// Record that `word` has started scoring
    pub fn record(&self, word: &Word) {
        if let Some(sink) = &self.sink {
            let line = progress_line(word, OffsetDateTime::now_utc());
            let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = writeln!(sink, "{line}") {
                self.bar.println(format!("progress log write failed: {e}"));
            }
        }
        self.bar.set_message(word.to_string());
        self.bar.inc(1);
    }

    /// Flush the log file and close the bar
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log file cannot be flushed.
    pub fn finish(&self) -> io::Result<()> {
        self.bar.finish_with_message("Complete!");
        match &self.sink {
            Some(sink) => sink.lock().unwrap_or_else(PoisonError::into_inner).flush(),
            None => Ok(()),
        }
    }
}

/// Progress bar for `total` words, in the terminal style used across the CLI
#[must_use]
pub fn terminal_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed_precise} | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Log line for a word starting at `at`
#[must_use]
pub fn progress_line(word: &Word, at: OffsetDateTime) -> String {
    format!("word: {word}\ttime: {}", timestamp(at))
}

/// `YYYY-MM-DD HH:MM:SS UTC`
#[must_use]
pub fn timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    at.to_offset(time::UtcOffset::UTC)
        .format(format)
        .map_or_else(|_| at.unix_timestamp().to_string(), |t| format!("{t} UTC"))
}

//! Score table output
//!
//! Tab-separated, with a `word / expected_entropy / frequency` header.

use crate::scoring::{ScoreTable, ScoredWord};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header row of the score table
pub const HEADER: &str = "word\texpected_entropy\tfrequency";

/// Write rows as TSV
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_tsv<'a, W, I>(mut out: W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ScoredWord>,
{
    writeln!(out, "{HEADER}")?;
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}",
            row.word, row.expected_information, row.frequency
        )?;
    }
    out.flush()
}

/// Save the table to `path`, replacing any existing file
///
/// Rows follow corpus order, or descending score when `ranked` is set.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_tsv(table: &ScoreTable, path: &Path, ranked: bool) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let out = BufWriter::new(File::create(path)?);

    if ranked {
        write_tsv(out, table.ranked())
    } else {
        write_tsv(out, table.iter())
    }
}

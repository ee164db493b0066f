//! Scored corpus

use crate::core::Word;
use rustc_hash::FxHashMap;

/// One row of the score table
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    /// Expected information in bits
    pub expected_information: f64,
    pub frequency: u64,
}

/// Expected information for every corpus word, in corpus order
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    rows: Vec<ScoredWord>,
    index: FxHashMap<String, usize>,
}

impl ScoreTable {
    /// Build a table from rows already in corpus order
    #[must_use]
    pub fn from_rows(rows: Vec<ScoredWord>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.word.text().to_string(), i))
            .collect();
        Self { rows, index }
    }

    /// Score of `word`, if it was scored
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index
            .get(word)
            .map(|&i| self.rows[i].expected_information)
    }

    /// Rows in corpus order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredWord> {
        self.rows.iter()
    }

    /// Rows sorted by expected information, highest first
    ///
    /// Ties keep corpus order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoredWord> {
        let mut ranked: Vec<&ScoredWord> = self.rows.iter().collect();
        ranked.sort_by(|a, b| b.expected_information.total_cmp(&a.expected_information));
        ranked
    }

    /// Best-scoring row
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.ranked().into_iter().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

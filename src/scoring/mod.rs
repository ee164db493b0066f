//! Guess evaluation engine
//!
//! Derives constraints for each (guess, pattern) pair, filters the corpus,
//! and turns the surviving frequency mass into expected information.

mod calculator;
mod config;
mod constraints;
mod dispatcher;
mod filter;
mod table;

pub use calculator::{
    PatternBreakdown, PatternOutcome, expected_information, information, pattern_breakdown,
};
pub use config::{ConfigError, MAX_WORD_LENGTH, ScoringConfig, default_workers};
pub use constraints::{Constraints, Derivation, Impossibility, derive};
pub use dispatcher::{DispatchError, partition, score_corpus};
pub use filter::{filter, guess_filter, matched_mass};
pub use table::{ScoreTable, ScoredWord};

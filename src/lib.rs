//! Wordle Openers
//!
//! Ranks every word of a corpus by the frequency-weighted expected information
//! (Shannon entropy, in bits) it yields as a first Wordle guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::corpus::Corpus;
//! use wordle_openers::scoring::{ScoringConfig, score_corpus};
//!
//! let corpus = Corpus::from_pairs(5, [("slate", 3), ("crane", 2), ("irate", 1)]).unwrap();
//! let config = ScoringConfig::new(5).unwrap();
//!
//! let table = score_corpus(&corpus, &config, |_| {}).unwrap();
//! for row in table.ranked() {
//!     println!("{} {:.3}", row.word, row.expected_information);
//! }
//! ```

// Core domain types
pub mod core;

// Word corpus and loading
pub mod corpus;

// Guess evaluation engine
pub mod scoring;

// Command implementations
pub mod commands;

// Terminal and file output
pub mod output;

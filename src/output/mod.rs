//! Terminal and file output
//!
//! Display utilities for CLI results, the score table writer and the progress log.

pub mod display;
pub mod formatters;
pub mod progress;
pub mod table;

pub use display::{print_analysis_result, print_score_result};

//! Command implementations

pub mod analyze;
pub mod score;

pub use analyze::{AnalysisResult, analyze_word};
pub use score::{ScoreOptions, ScoreResult, run_score};

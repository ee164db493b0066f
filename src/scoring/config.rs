//! Immutable scoring configuration
//!
//! Built once at startup and passed by reference to the scorer and the dispatcher.

use crate::core::Pattern;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

/// Longest supported word (3^10 = 59,049 patterns per guess)
pub const MAX_WORD_LENGTH: usize = 10;

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLength(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => {
                write!(f, "Word length must be between 1 and {MAX_WORD_LENGTH}, got {len}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Word length, pattern space and worker count for one scoring run
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    word_length: usize,
    patterns: Vec<Pattern>,
    workers: NonZeroUsize,
}

impl ScoringConfig {
    /// Create a configuration for words of `word_length` letters
    ///
    /// The worker count defaults to the available hardware parallelism.
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedLength` unless `1 <= word_length <= MAX_WORD_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::scoring::ScoringConfig;
    ///
    /// let config = ScoringConfig::new(5).unwrap().with_workers(4);
    /// assert_eq!(config.patterns().len(), 243);
    /// assert_eq!(config.workers().get(), 4);
    /// ```
    pub fn new(word_length: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(ConfigError::UnsupportedLength(word_length));
        }

        Ok(Self {
            word_length,
            patterns: Pattern::all(word_length),
            workers: default_workers(),
        })
    }

    /// Override the worker count; 0 restores the default
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = NonZeroUsize::new(workers).unwrap_or_else(default_workers);
        self
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Every feedback pattern, in enumeration order
    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[inline]
    #[must_use]
    pub const fn workers(&self) -> NonZeroUsize {
        self.workers
    }
}

/// Number of hardware threads, or 1 if it cannot be determined
#[must_use]
pub fn default_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

//! Letter sets and per-position candidate letters
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`, iterated alphabetically.
//! `CandidateLetters` holds one set per word position.

use std::fmt;

/// An ordered set of lowercase ASCII letters
///
/// Bytes outside `a..=z` are never members: `single` gives the empty set,
/// `insert` and `remove` ignore them, `contains` returns `false`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// A set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove a letter, returning whether it was present
    #[inline]
    pub const fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}

/// Letters still allowed at each position of a word
///
/// Every (guess, pattern) evaluation works on its own copy, seeded from
/// [`CandidateLetters::full`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLetters {
    positions: Vec<LetterSet>,
}

impl CandidateLetters {
    /// Every position allows the full alphabet
    #[must_use]
    pub fn full(word_length: usize) -> Self {
        Self {
            positions: vec![LetterSet::ALPHABET; word_length],
        }
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Allowed letters at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of range
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LetterSet] {
        &self.positions
    }

    /// Keep only `letter` at `position` (never adds a letter that was already removed)
    pub fn collapse(&mut self, position: usize, letter: u8) {
        let slot = &mut self.positions[position];
        *slot = slot.intersection(LetterSet::single(letter));
    }

    /// Remove `letter` from `position` only
    pub fn remove_at(&mut self, position: usize, letter: u8) {
        self.positions[position].remove(letter);
    }

    /// Remove `letter` from every position
    pub fn remove_everywhere(&mut self, letter: u8) {
        for slot in &mut self.positions {
            slot.remove(letter);
        }
    }

    /// First position left without any allowed letter
    #[must_use]
    pub fn first_exhausted(&self) -> Option<usize> {
        self.positions.iter().position(|set| set.is_empty())
    }

    /// Check that `word` has an allowed letter at every position
    #[must_use]
    pub fn admits(&self, word: &[u8]) -> bool {
        word.len() == self.positions.len()
            && self
                .positions
                .iter()
                .zip(word)
                .all(|(set, &letter)| set.contains(letter))
    }
}

/// Renders as a character class per position, e.g. `[abc][i][xyz]`
impl fmt::Display for CandidateLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.positions {
            write!(f, "[{set}]")?;
        }
        Ok(())
    }
}

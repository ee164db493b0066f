//! Feedback colors and patterns
//!
//! A pattern is one color per word position. The full pattern space for a
//! word of length L has 3^L members, enumerated with position 0 as the
//! outermost loop and colors in the order Green, Yellow, Grey:
//!
//! ```text
//! index 0   -> GGGGG
//! index 1   -> GGGGY
//! index 2   -> GGGG-
//! index 3   -> GGGYG
//! ...
//! index 242 -> -----
//! ```

use super::Word;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Letter is in the word at this position
    Green = 0,
    /// Letter is in the word, but not at this position
    Yellow = 1,
    /// Letter is not in the word
    Grey = 2,
}

impl Color {
    /// Colors in enumeration order
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Grey];

    /// Look up a color by its numeric code (0 = green, 1 = yellow, 2 = grey)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Green),
            1 => Some(Self::Yellow),
            2 => Some(Self::Grey),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Feedback pattern for a guess: one color per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Color>);

impl Pattern {
    /// Build a pattern from numeric color codes
    ///
    /// Returns `None` if any code is not 0, 1 or 2.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::{Color, Pattern};
    ///
    /// let p = Pattern::from_codes(&[1, 2, 2, 0, 1]).unwrap();
    /// assert_eq!(p.color(0), Color::Yellow);
    /// assert_eq!(p.to_string(), "Y--GY");
    /// ```
    #[must_use]
    pub fn from_codes(codes: &[u8]) -> Option<Self> {
        codes
            .iter()
            .map(|&code| Color::from_code(code))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Number of patterns for words of `length` letters (3^length)
    #[must_use]
    pub fn count(length: usize) -> usize {
        Color::ALL.len().pow(length as u32)
    }

    /// The pattern at `index` in enumeration order
    ///
    /// # Panics
    /// Panics in debug mode if `index >= Pattern::count(length)`
    #[must_use]
    pub fn from_index(index: usize, length: usize) -> Self {
        debug_assert!(index < Self::count(length), "pattern index out of range");

        let base = Color::ALL.len();
        let mut colors = vec![Color::Green; length];
        let mut rest = index;
        // Position 0 is the most significant digit
        for slot in colors.iter_mut().rev() {
            *slot = Color::ALL[rest % base];
            rest /= base;
        }
        Self(colors)
    }

    /// Every pattern for words of `length` letters, in enumeration order
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Pattern;
    ///
    /// let all = Pattern::all(5);
    /// assert_eq!(all.len(), 243);
    /// assert_eq!(all[0].to_string(), "GGGGG");
    /// assert_eq!(all[242].to_string(), "-----");
    /// ```
    #[must_use]
    pub fn all(length: usize) -> Vec<Self> {
        (0..Self::count(length))
            .map(|index| Self::from_index(index, length))
            .collect()
    }

    /// Position of this pattern in enumeration order
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &color| acc * Color::ALL.len() + color.code() as usize)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Color at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of range
    #[inline]
    #[must_use]
    pub fn color(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&color| color == Color::Green)
    }

    /// Calculate the feedback Wordle shows when `guess` is played against `answer`
    ///
    /// Greens are marked first; yellows are then handed out left to right
    /// while unmatched copies of the letter remain in the answer.
    ///
    /// # Panics
    /// Panics if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane", 5).unwrap();
    /// let answer = Word::new("slate", 5).unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        assert_eq!(guess.len(), answer.len(), "words must be the same length");

        let mut result = vec![Color::Grey; guess.len()];
        let mut available = [0u8; 26];

        // First pass: greens, and count unmatched answer letters
        for (i, (&g, &a)) in guess.bytes().iter().zip(answer.bytes()).enumerate() {
            if g == a {
                result[i] = Color::Green;
            } else {
                available[(a - b'a') as usize] += 1;
            }
        }

        // Second pass: yellows from the remaining pool
        for (i, &g) in guess.bytes().iter().enumerate() {
            let slot = &mut available[(g - b'a') as usize];
            if result[i] != Color::Green && *slot > 0 {
                result[i] = Color::Yellow;
                *slot -= 1;
            }
        }

        Self(result)
    }

    /// Parse a pattern from a string like "GY-GY", "🟩🟨⬜🟩🟨" or "01201"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩/'0' for green
    /// - 'Y'/'y'/🟨/'1' for yellow
    /// - '-'/'_'/⬜/'2' for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::from_str("01201").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' | '0' => Some(Color::Green),
                'Y' | 'y' | '🟨' | '1' => Some(Color::Yellow),
                '-' | '_' | '⬜' | '2' => Some(Color::Grey),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|&color| color.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in &self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    #[test]
    fn pattern_count_is_power_of_three() {
        assert_eq!(Pattern::count(1), 3);
        assert_eq!(Pattern::count(5), 243);
        assert_eq!(Pattern::all(4).len(), 81);
    }

    #[test]
    fn enumeration_order_matches_nested_loops() {
        let all = Pattern::all(5);

        assert_eq!(all[0].colors(), &[Color::Green; 5]);
        assert_eq!(all[1].to_string(), "GGGGY");
        assert_eq!(all[2].to_string(), "GGGG-");
        assert_eq!(all[3].to_string(), "GGGYG");
        assert_eq!(all[81].to_string(), "YGGGG");
        assert_eq!(all[162].to_string(), "-GGGG");
        assert_eq!(all[242].colors(), &[Color::Grey; 5]);
    }

    #[test]
    fn enumeration_matches_codes_as_base_three() {
        // Codes read as a base-3 number give the index
        let p = Pattern::from_codes(&[1, 2, 2, 0, 1]).unwrap();
        assert_eq!(p.index(), 81 + 2 * 27 + 2 * 9 + 1);
        assert_eq!(Pattern::all(5)[p.index()], p);
    }

    #[test]
    fn enumeration_has_no_duplicates() {
        let all = Pattern::all(5);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn from_codes_rejects_unknown_code() {
        assert!(Pattern::from_codes(&[0, 1, 3]).is_none());
        assert!(Pattern::from_codes(&[0, 1, 2]).is_some());
    }

    #[test]
    fn perfect_pattern() {
        assert!(Pattern::all(5)[0].is_perfect());
        assert!(!Pattern::all(5)[1].is_perfect());
    }

    #[test]
    fn calculate_all_green() {
        let w = word("crane");
        assert!(Pattern::calculate(&w, &w).is_perfect());
    }

    #[test]
    fn calculate_all_grey() {
        let p = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(p.to_string(), "-----");
    }

    #[test]
    fn calculate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let p = Pattern::calculate(&word("robot"), &word("floor"));
        assert_eq!(p.to_string(), "YY-G-");
    }

    #[test]
    fn calculate_duplicate_letters_limited_yellows() {
        // Only one E left after the green, so only one yellow
        let p = Pattern::calculate(&word("eerie"), &word("there"));
        assert_eq!(p.to_string(), "Y-Y-G");
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();
        let p4 = Pattern::from_str("01022").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
        assert!("G3".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_to_emoji() {
        let p = Pattern::from_str("GY-").unwrap();
        assert_eq!(p.to_emoji(), "🟩🟨⬜");
    }
}

//! Word ladder word representation
//!
//! A Word stores validated lowercase ASCII letters. All words taking part in a
//! single search share one length; that is checked where words meet an index,
//! not here.

use super::Pattern;
use std::fmt;
use thiserror::Error;

/// A dictionary word made of lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters: {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cog").unwrap();
    /// assert_eq!(word.text(), "cog");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0g").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word, provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// The wildcard patterns of this word, one per position
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        (0..self.len()).map(move |position| Pattern::masked(self, position))
    }

    /// Count of positions where the two words differ
    ///
    /// Returns `None` when the words have different lengths, since they are
    /// not comparable position by position.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let hit = Word::new("hit").unwrap();
    /// let cog = Word::new("cog").unwrap();
    /// assert_eq!(hit.hamming_distance(&cog), Some(3));
    /// assert_eq!(hit.hamming_distance(&Word::new("hits").unwrap()), None);
    /// ```
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.chars()
                .iter()
                .zip(other.chars())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// True when exactly one position differs
    #[inline]
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        self.hamming_distance(other) == Some(1)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

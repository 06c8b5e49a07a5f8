//! Wildcard patterns used as adjacency keys
//!
//! A pattern is a word with exactly one position replaced by `*`. Two distinct
//! words sharing a pattern differ only at that position, which makes them
//! ladder neighbours.

use super::Word;
use std::fmt;

/// A word with one position masked by the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    bytes: Box<[u8]>,
    position: usize,
}

impl Pattern {
    /// Wildcard marker; never a valid word character
    pub const WILDCARD: u8 = b'*';

    /// Mask `position` of `word`
    ///
    /// # Panics
    /// Panics if `position >= word.len()`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Pattern, Word};
    ///
    /// let hot = Word::new("hot").unwrap();
    /// let pattern = Pattern::masked(&hot, 1);
    /// assert_eq!(pattern.to_string(), "h*t");
    /// assert!(pattern.matches(&Word::new("hit").unwrap()));
    /// ```
    #[must_use]
    pub fn masked(word: &Word, position: usize) -> Self {
        assert!(
            position < word.len(),
            "position {position} out of range for '{word}'"
        );

        let mut bytes: Box<[u8]> = word.chars().into();
        bytes[position] = Self::WILDCARD;

        Self { bytes, position }
    }

    /// Index of the masked position
    #[inline]
    #[must_use]
    pub const fn wildcard_position(&self) -> usize {
        self.position
    }

    /// Length of the words this pattern can match
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a pattern covers at least the wildcard
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True if `word` produces this pattern when masked at the wildcard position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .bytes
                .iter()
                .zip(word.chars())
                .all(|(&p, &c)| p == Self::WILDCARD || p == c)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bytes are ASCII letters plus the wildcard
        for &b in &*self.bytes {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

//! Ladder paths
//!
//! A Path is an ordered, non-empty run of words from a start word to a target.

use super::Word;
use std::fmt;

/// A sequence of words from `begin()` to `end()`
///
/// Construction only guarantees non-emptiness. Use [`Path::is_ladder`] to
/// check the one-letter-per-step property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    words: Vec<Word>,
}

impl Path {
    /// Build a path from its words
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Path holding a single word
    #[must_use]
    pub fn singleton(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Words in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// First word
    #[inline]
    #[must_use]
    pub fn begin(&self) -> &Word {
        &self.words[0]
    }

    /// Last word
    #[inline]
    #[must_use]
    pub fn end(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Number of words (the BFS score)
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of single-letter changes
    #[inline]
    #[must_use]
    pub fn transformations(&self) -> usize {
        self.words.len() - 1
    }

    /// True if every consecutive pair differs in exactly one position
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Path, Word};
    ///
    /// let words = ["hit", "hot", "dot"].map(|w| Word::new(w).unwrap());
    /// let path = Path::new(words.to_vec()).unwrap();
    /// assert!(path.is_ladder());
    /// assert_eq!(path.transformations(), 2);
    /// ```
    #[must_use]
    pub fn is_ladder(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].is_neighbor(&pair[1]))
    }

    /// True if no word repeats
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, word)| !self.words[i + 1..].contains(word))
    }

    /// True if `word` occurs anywhere on the path
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

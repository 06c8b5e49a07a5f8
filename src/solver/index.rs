//! Pattern → words adjacency index
//!
//! Built once from a dictionary and read-only afterwards, so it can be shared
//! by any number of searches (including across rayon workers).

use super::error::{LadderError, LadderResult};
use crate::core::{Pattern, Word};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Maps every wildcard pattern to the dictionary words producing it
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    buckets: FxHashMap<Pattern, Vec<Word>>,
    members: FxHashSet<Word>,
    entries: usize,
    word_len: Option<usize>,
}

impl AdjacencyIndex {
    /// Build the index from a dictionary
    ///
    /// Duplicate entries are kept, so their neighbours are yielded more than
    /// once by [`AdjacencyIndex::neighbors_of`].
    ///
    /// # Errors
    /// Returns `LadderError::LengthMismatch` if the words do not all have the
    /// length of the first word.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::solver::AdjacencyIndex;
    ///
    /// let words = ["hot", "dot", "dog"].map(|w| Word::new(w).unwrap());
    /// let index = AdjacencyIndex::build(words).unwrap();
    ///
    /// let hot = Word::new("hot").unwrap();
    /// let neighbours: Vec<&str> = index.neighbors_of(&hot).map(|w| w.text()).collect();
    /// assert_eq!(neighbours, vec!["dot"]);
    /// ```
    pub fn build<I>(dictionary: I) -> LadderResult<Self>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut index = Self::default();

        for word in dictionary {
            index.insert(word)?;
        }

        debug!(
            "built adjacency index: {} entries, {} distinct words, {} patterns",
            index.entries,
            index.members.len(),
            index.buckets.len()
        );

        Ok(index)
    }

    fn insert(&mut self, word: Word) -> LadderResult<()> {
        let expected = *self.word_len.get_or_insert(word.len());
        if word.len() != expected {
            return Err(LadderError::LengthMismatch {
                found: word.len(),
                word,
                expected,
            });
        }

        for pattern in word.patterns() {
            self.buckets.entry(pattern).or_default().push(word.clone());
        }
        self.members.insert(word);
        self.entries += 1;

        Ok(())
    }

    /// Every word sharing a pattern with `word`, except `word` itself
    ///
    /// Yields a multiset: a neighbour can appear more than once when the
    /// dictionary holds duplicates or words are a single letter long.
    pub fn neighbors_of<'a>(&'a self, word: &'a Word) -> impl Iterator<Item = &'a Word> + 'a {
        word.patterns()
            .filter_map(move |pattern| self.buckets.get(&pattern))
            .flatten()
            .filter(move |&candidate| candidate != word)
    }

    /// Deduplicated, sorted neighbours of `word`
    #[must_use]
    pub fn neighbor_set<'a>(&'a self, word: &'a Word) -> Vec<&'a Word> {
        let mut neighbours: Vec<&Word> = self.neighbors_of(word).collect();
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Candidate list stored for `pattern`, in dictionary order
    #[must_use]
    pub fn candidates(&self, pattern: &Pattern) -> &[Word] {
        self.buckets.get(pattern).map_or(&[], Vec::as_slice)
    }

    /// Dictionary membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Length shared by every dictionary word, `None` for an empty dictionary
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> Option<usize> {
        self.word_len
    }

    /// Check that a query word fits this index
    ///
    /// # Errors
    /// Returns `LadderError::LengthMismatch` if the index has a word length
    /// and `word` differs from it.
    pub fn check_length(&self, word: &Word) -> LadderResult<()> {
        match self.word_len {
            Some(expected) if expected != word.len() => Err(LadderError::LengthMismatch {
                word: word.clone(),
                expected,
                found: word.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Number of dictionary entries, duplicates included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// True if built from an empty dictionary
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct dictionary words
    #[inline]
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.members.len()
    }

    /// Distinct dictionary words in sorted order
    #[must_use]
    pub fn words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.members.iter().collect();
        words.sort_unstable();
        words
    }

    /// Number of distinct patterns
    #[inline]
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.buckets.len()
    }
}

//! Breadth-first shortest ladder search
//!
//! Walks the implicit word graph one layer at a time. The layer counter is the
//! number of words on a shortest ladder, so a direct neighbour pair scores 2.

use super::error::{LadderError, LadderResult};
use super::index::AdjacencyIndex;
use crate::core::{Path, Word};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Minimal ladder length plus one ladder achieving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestLadder {
    /// Words on a shortest ladder (1 when begin == end)
    pub word_count: usize,
    /// One shortest ladder, first-discoverer order
    pub path: Path,
}

impl ShortestLadder {
    /// Number of single-letter changes
    #[inline]
    #[must_use]
    pub const fn transformations(&self) -> usize {
        self.word_count - 1
    }
}

/// Layered BFS over an [`AdjacencyIndex`]
pub struct ShortestDistanceSearch<'a> {
    index: &'a AdjacencyIndex,
}

impl<'a> ShortestDistanceSearch<'a> {
    #[must_use]
    pub const fn new(index: &'a AdjacencyIndex) -> Self {
        Self { index }
    }

    /// Shortest ladder from `begin` to `end`, with the index as dictionary
    ///
    /// # Errors
    /// - `LengthMismatch` if either word has a different length from the index
    /// - `NotInDictionary` if `end` is not a dictionary word, checked before
    ///   any traversal
    /// - `Unreachable` if the frontier empties without reaching `end`
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::solver::{AdjacencyIndex, ShortestDistanceSearch};
    ///
    /// let words = ["hot", "dot", "dog", "cog"].map(|w| Word::new(w).unwrap());
    /// let index = AdjacencyIndex::build(words).unwrap();
    ///
    /// let begin = Word::new("hit").unwrap();
    /// let end = Word::new("cog").unwrap();
    /// let ladder = ShortestDistanceSearch::new(&index).run(&begin, &end).unwrap();
    /// assert_eq!(ladder.word_count, 5);
    /// assert_eq!(ladder.path.to_string(), "hit → hot → dot → dog → cog");
    /// ```
    pub fn run(&self, begin: &Word, end: &Word) -> LadderResult<ShortestLadder> {
        self.run_with(begin, end, |word| self.index.contains(word))
    }

    /// Shortest ladder from `begin` to `end` with an explicit membership check
    ///
    /// `in_dictionary` is consulted once, for `end`.
    ///
    /// # Errors
    /// Same as [`ShortestDistanceSearch::run`].
    pub fn run_with<F>(&self, begin: &Word, end: &Word, in_dictionary: F) -> LadderResult<ShortestLadder>
    where
        F: Fn(&Word) -> bool,
    {
        self.index.check_length(begin)?;
        self.index.check_length(end)?;
        if begin.len() != end.len() {
            return Err(LadderError::LengthMismatch {
                word: end.clone(),
                expected: begin.len(),
                found: end.len(),
            });
        }

        if !in_dictionary(end) {
            return Err(LadderError::NotInDictionary(end.clone()));
        }

        let mut visited: FxHashSet<&Word> = FxHashSet::default();
        let mut parent: FxHashMap<&Word, &Word> = FxHashMap::default();
        let mut queue: VecDeque<&Word> = VecDeque::new();
        let mut score = 1;

        visited.insert(begin);
        queue.push_back(begin);

        while !queue.is_empty() {
            // Neighbours pushed during this layer belong to the next one
            let layer_size = queue.len();
            trace!("layer {score}: {layer_size} words");

            for _ in 0..layer_size {
                let Some(word) = queue.pop_front() else {
                    break;
                };

                if word == end {
                    debug!(
                        "'{begin}' → '{end}': {score} words, {} visited",
                        visited.len()
                    );
                    return Ok(ShortestLadder {
                        word_count: score,
                        path: backtrack(&parent, begin, word),
                    });
                }

                for neighbour in self.index.neighbors_of(word) {
                    if visited.insert(neighbour) {
                        parent.insert(neighbour, word);
                        queue.push_back(neighbour);
                    }
                }
            }

            score += 1;
        }

        debug!("'{begin}' → '{end}': unreachable after {} words", visited.len());
        Err(LadderError::Unreachable {
            begin: begin.clone(),
            end: end.clone(),
        })
    }
}

/// Follow parent pointers from `end` back to `begin`
fn backtrack<'w>(parent: &FxHashMap<&'w Word, &'w Word>, begin: &Word, end: &'w Word) -> Path {
    let mut words = vec![end.clone()];
    let mut current = end;

    while current != begin {
        match parent.get(current) {
            Some(&previous) => {
                words.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }

    words.reverse();
    Path::new(words).unwrap_or_else(|| Path::singleton(begin.clone()))
}

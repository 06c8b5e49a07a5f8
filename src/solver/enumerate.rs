//! Enumeration of every shortest ladder
//!
//! Bounded depth-first search over an explicit worklist of partial ladders.
//! A partial ladder is abandoned as soon as one of its words sits further
//! from the target (in differing letters) than the steps left in the budget,
//! since each step changes a single letter.

use super::error::{LadderError, LadderResult};
use super::index::AdjacencyIndex;
use crate::core::{Path, Word};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::ops::AddAssign;

/// Counters describing one enumeration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Partial ladders taken off the worklist
    pub explored: usize,
    /// Partial ladders discarded by the letter-distance bound
    pub pruned: usize,
    /// Partial ladders that reached the target (before deduplication)
    pub completed: usize,
}

impl AddAssign for EnumerationStats {
    fn add_assign(&mut self, other: Self) {
        self.explored += other.explored;
        self.pruned += other.pruned;
        self.completed += other.completed;
    }
}

/// Distinct shortest ladders plus the work it took to find them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    pub paths: BTreeSet<Path>,
    pub stats: EnumerationStats,
}

impl PathSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn merge(mut self, other: Self) -> Self {
        self.paths.extend(other.paths);
        self.stats += other.stats;
        self
    }
}

/// Finds every simple ladder of an exact word count
pub struct AllShortestPathsEnumerator<'a> {
    index: &'a AdjacencyIndex,
}

impl<'a> AllShortestPathsEnumerator<'a> {
    #[must_use]
    pub const fn new(index: &'a AdjacencyIndex) -> Self {
        Self { index }
    }

    /// Every ladder of exactly `length` words from `begin` to `end`
    ///
    /// `length` is the word count reported by the breadth-first search. With
    /// that bound every ladder found is a shortest one. A `length` of 0 yields
    /// an empty set.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if a query word does not fit the index.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::solver::{AdjacencyIndex, AllShortestPathsEnumerator};
    ///
    /// let words = ["hot", "dot", "dog", "cog", "lot", "log"].map(|w| Word::new(w).unwrap());
    /// let index = AdjacencyIndex::build(words).unwrap();
    ///
    /// let begin = Word::new("hit").unwrap();
    /// let end = Word::new("cog").unwrap();
    /// let found = AllShortestPathsEnumerator::new(&index).enumerate(&begin, &end, 5).unwrap();
    /// assert_eq!(found.len(), 2);
    /// ```
    pub fn enumerate(&self, begin: &Word, end: &Word, length: usize) -> LadderResult<PathSet> {
        self.check_query(begin, end)?;

        let worklist = Worklist {
            index: self.index,
            end,
            length,
        };
        let mut found = PathSet::default();
        worklist.drain(vec![vec![begin]], &mut found);

        debug!(
            "'{begin}' → '{end}' in {length} words: {} ladders, {:?}",
            found.len(),
            found.stats
        );
        Ok(found)
    }

    /// Same result as [`AllShortestPathsEnumerator::enumerate`], with the
    /// branches below the start word explored on the rayon pool
    ///
    /// # Errors
    /// Returns `LengthMismatch` if a query word does not fit the index.
    pub fn enumerate_parallel(
        &self,
        begin: &Word,
        end: &Word,
        length: usize,
    ) -> LadderResult<PathSet> {
        self.check_query(begin, end)?;

        let worklist = Worklist {
            index: self.index,
            end,
            length,
        };

        // Expand the root once; each child branch is independent afterwards
        let mut root = PathSet::default();
        let mut branches = Vec::new();
        worklist.step(vec![begin], &mut branches, &mut root);

        let found = branches
            .into_par_iter()
            .map(|branch| {
                let mut local = PathSet::default();
                worklist.drain(vec![branch], &mut local);
                local
            })
            .reduce(PathSet::default, PathSet::merge)
            .merge(root);

        debug!(
            "'{begin}' → '{end}' in {length} words (parallel): {} ladders, {:?}",
            found.len(),
            found.stats
        );
        Ok(found)
    }

    fn check_query(&self, begin: &Word, end: &Word) -> LadderResult<()> {
        self.index.check_length(begin)?;
        self.index.check_length(end)?;
        if begin.len() == end.len() {
            Ok(())
        } else {
            Err(LadderError::LengthMismatch {
                word: end.clone(),
                expected: begin.len(),
                found: end.len(),
            })
        }
    }
}

/// Shared, read-only state of one enumeration
struct Worklist<'w> {
    index: &'w AdjacencyIndex,
    end: &'w Word,
    length: usize,
}

impl<'w> Worklist<'w> {
    fn drain(&self, mut stack: Vec<Vec<&'w Word>>, found: &mut PathSet) {
        while let Some(partial) = stack.pop() {
            self.step(partial, &mut stack, found);
        }
    }

    /// Process one partial ladder: prune it, record it, or push its extensions
    fn step(&self, partial: Vec<&'w Word>, stack: &mut Vec<Vec<&'w Word>>, found: &mut PathSet) {
        found.stats.explored += 1;

        // Earlier positions passed this check when their prefix was popped
        let Some(&last) = partial.last() else {
            return;
        };
        if !self.admissible(last, partial.len() - 1) {
            found.stats.pruned += 1;
            return;
        }

        if partial.len() > self.length {
            return;
        }

        if last == self.end {
            found.stats.completed += 1;
            if let Some(path) = Path::new(partial.into_iter().cloned().collect()) {
                found.paths.insert(path);
            }
            return;
        }

        if partial.len() == self.length {
            return;
        }

        for neighbour in self.index.neighbors_of(last) {
            if !partial.contains(&neighbour) {
                let mut extended = Vec::with_capacity(partial.len() + 1);
                extended.extend_from_slice(&partial);
                extended.push(neighbour);
                stack.push(extended);
            }
        }
    }

    /// Whether `word` at `position` can still reach the target in time
    fn admissible(&self, word: &Word, position: usize) -> bool {
        let Some(steps_left) = self.length.checked_sub(position + 1) else {
            return false;
        };

        word.hamming_distance(self.end)
            .is_some_and(|distance| distance <= steps_left)
    }
}

/// Unpruned reference: every simple ladder of exactly `length` words
///
/// Plain depth-first search capped only by `length`. Exponential, meant for
/// cross-checking [`AllShortestPathsEnumerator`] on small dictionaries.
#[must_use]
pub fn brute_force_shortest_paths(
    index: &AdjacencyIndex,
    begin: &Word,
    end: &Word,
    length: usize,
) -> BTreeSet<Path> {
    fn walk<'w>(
        index: &'w AdjacencyIndex,
        end: &Word,
        length: usize,
        trail: &mut Vec<&'w Word>,
        found: &mut BTreeSet<Path>,
    ) {
        let Some(&last) = trail.last() else {
            return;
        };

        if last == end {
            if trail.len() == length {
                if let Some(path) = Path::new(trail.iter().map(|&w| w.clone()).collect()) {
                    found.insert(path);
                }
            }
            return;
        }

        if trail.len() >= length {
            return;
        }

        for neighbour in index.neighbors_of(last) {
            if !trail.contains(&neighbour) {
                trail.push(neighbour);
                walk(index, end, length, trail, found);
                trail.pop();
            }
        }
    }

    let mut found = BTreeSet::new();
    if length == 0 {
        return found;
    }

    let mut trail = vec![begin];
    walk(index, end, length, &mut trail, &mut found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ShortestDistanceSearch;
    use crate::wordlists::loader::words_from_slice;

    const LADDER: &[&str] = &["hit", "hot", "dot", "dog", "cog", "lot", "log"];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn index(words: &[&str]) -> AdjacencyIndex {
        AdjacencyIndex::build(words_from_slice(words)).unwrap()
    }

    fn path(words: &[&str]) -> Path {
        Path::new(words_from_slice(words)).unwrap()
    }

    /// Every word over `alphabet` of length `len`, so each word has
    /// `len * (alphabet.len() - 1)` neighbours
    fn complete_dictionary(alphabet: &[u8], len: usize) -> Vec<Word> {
        let mut words = vec![String::new()];
        for _ in 0..len {
            words = words
                .iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |&c| {
                        let mut next = prefix.clone();
                        next.push(c as char);
                        next
                    })
                })
                .collect();
        }
        words.into_iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn finds_both_classic_ladders() {
        let index = index(LADDER);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hit"), &word("cog"), 5)
            .unwrap();

        let expected: BTreeSet<Path> = [
            path(&["hit", "hot", "dot", "dog", "cog"]),
            path(&["hit", "hot", "lot", "log", "cog"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(found.paths, expected);
    }

    #[test]
    fn paths_match_bfs_length_and_are_simple_ladders() {
        let index = index(LADDER);
        let ladder = ShortestDistanceSearch::new(&index)
            .run(&word("hit"), &word("cog"))
            .unwrap();
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hit"), &word("cog"), ladder.word_count)
            .unwrap();

        assert!(!found.is_empty());
        assert!(found.paths.contains(&ladder.path));
        for p in &found.paths {
            assert_eq!(p.word_count(), ladder.word_count);
            assert_eq!(p.begin().text(), "hit");
            assert_eq!(p.end().text(), "cog");
            assert!(p.is_ladder());
            assert!(p.is_simple());
        }
    }

    #[test]
    fn never_returns_longer_paths() {
        let index = index(LADDER);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hit"), &word("cog"), 5)
            .unwrap();

        assert!(found.paths.iter().all(|p| p.word_count() <= 5));
    }

    #[test]
    fn begin_equals_end_yields_singleton() {
        let index = index(&["cat", "cot"]);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("cat"), &word("cat"), 1)
            .unwrap();

        assert_eq!(found.len(), 1);
        assert!(found.paths.contains(&Path::singleton(word("cat"))));
    }

    #[test]
    fn zero_length_yields_nothing() {
        let index = index(LADDER);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hit"), &word("cog"), 0)
            .unwrap();

        assert!(found.is_empty());
        assert_eq!(found.stats.pruned, 1);
    }

    #[test]
    fn too_short_bound_finds_nothing() {
        let index = index(LADDER);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hit"), &word("cog"), 4)
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn duplicate_entries_deduplicated() {
        let index = index(&["hot", "dot", "dot", "dog"]);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("hot"), &word("dog"), 3)
            .unwrap();

        assert_eq!(found.stats.completed, 2);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn length_mismatch_rejected() {
        let index = index(LADDER);
        let result =
            AllShortestPathsEnumerator::new(&index).enumerate(&word("hit"), &word("cogs"), 5);

        assert!(matches!(result, Err(LadderError::LengthMismatch { .. })));
    }

    #[test]
    fn pruning_matches_brute_force_on_dense_dictionary() {
        // Every 3-letter word over {a, b, c}: aaa → ccc has 3! shortest ladders
        let index = AdjacencyIndex::build(complete_dictionary(b"abc", 3)).unwrap();
        let (begin, end) = (word("aaa"), word("ccc"));

        let ladder = ShortestDistanceSearch::new(&index).run(&begin, &end).unwrap();
        assert_eq!(ladder.word_count, 4);

        let pruned = AllShortestPathsEnumerator::new(&index)
            .enumerate(&begin, &end, ladder.word_count)
            .unwrap();
        let reference = brute_force_shortest_paths(&index, &begin, &end, ladder.word_count);

        assert_eq!(pruned.len(), 6);
        assert_eq!(pruned.paths, reference);
        assert!(pruned.stats.pruned > 0);
    }

    #[test]
    fn pruning_discards_detours() {
        // From "aa", moves to "ab"/"ac"/"ba"/"ca" do not approach "dd"
        let index = AdjacencyIndex::build(complete_dictionary(b"abcd", 2)).unwrap();
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate(&word("aa"), &word("dd"), 3)
            .unwrap();

        let expected: BTreeSet<Path> = [path(&["aa", "ad", "dd"]), path(&["aa", "da", "dd"])]
            .into_iter()
            .collect();
        assert_eq!(found.paths, expected);

        // 4 of the root's 6 children are pruned, then 4 of each survivor's 5
        assert_eq!(found.stats.pruned, 12);
        assert_eq!(found.stats.completed, 2);
        assert_eq!(found.stats.explored, 17);
        assert_eq!(
            found.stats.explored,
            found.stats.pruned + found.stats.completed + 3
        );
    }

    #[test]
    fn pruning_matches_brute_force_on_sparse_dictionary() {
        let words = &[
            "cold", "cord", "card", "ward", "warm", "wore", "core", "word", "worm", "corm", "cork",
            "work", "warn", "worn", "corn",
        ];
        let index = index(words);
        let (begin, end) = (word("cold"), word("warm"));

        let ladder = ShortestDistanceSearch::new(&index).run(&begin, &end).unwrap();
        let pruned = AllShortestPathsEnumerator::new(&index)
            .enumerate(&begin, &end, ladder.word_count)
            .unwrap();
        let reference = brute_force_shortest_paths(&index, &begin, &end, ladder.word_count);

        assert!(!reference.is_empty());
        assert_eq!(pruned.paths, reference);
    }

    #[test]
    fn parallel_matches_sequential() {
        let index = AdjacencyIndex::build(complete_dictionary(b"abcd", 3)).unwrap();
        let enumerator = AllShortestPathsEnumerator::new(&index);
        let (begin, end) = (word("abc"), word("dda"));

        let sequential = enumerator.enumerate(&begin, &end, 4).unwrap();
        let parallel = enumerator.enumerate_parallel(&begin, &end, 4).unwrap();

        assert_eq!(sequential.len(), 6);
        assert_eq!(sequential.paths, parallel.paths);
        assert_eq!(sequential.stats, parallel.stats);
    }

    #[test]
    fn parallel_handles_singleton() {
        let index = index(&["cat", "cot"]);
        let found = AllShortestPathsEnumerator::new(&index)
            .enumerate_parallel(&word("cat"), &word("cat"), 1)
            .unwrap();

        assert_eq!(found.len(), 1);
    }

    #[test]
    fn brute_force_zero_length() {
        let index = index(LADDER);
        assert!(brute_force_shortest_paths(&index, &word("hit"), &word("hit"), 0).is_empty());
        assert_eq!(
            brute_force_shortest_paths(&index, &word("hit"), &word("hit"), 1).len(),
            1
        );
    }
}

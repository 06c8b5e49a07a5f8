//! Main word ladder solver interface

use super::distance::{ShortestDistanceSearch, ShortestLadder};
use super::enumerate::{AllShortestPathsEnumerator, PathSet};
use super::error::LadderResult;
use super::index::AdjacencyIndex;
use crate::core::Word;

/// How much work a solve performs after the breadth-first search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Stop after finding one shortest ladder
    WitnessOnly,
    /// Enumerate every shortest ladder on the current thread
    #[default]
    AllPaths,
    /// Enumerate every shortest ladder on the rayon pool
    AllPathsParallel,
}

/// Outcome of a successful solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderSolution {
    /// Minimal word count and one witness ladder
    pub ladder: ShortestLadder,
    /// Every shortest ladder, unless the mode was `WitnessOnly`
    pub paths: Option<PathSet>,
}

/// Main word ladder solver
///
/// Owns the adjacency index, built once, and runs the distance search
/// followed by the enumeration against it.
#[derive(Debug, Clone)]
pub struct LadderSolver {
    index: AdjacencyIndex,
}

impl LadderSolver {
    #[must_use]
    pub const fn new(index: AdjacencyIndex) -> Self {
        Self { index }
    }

    /// Build the index from `words` and wrap it
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words differ in length.
    pub fn from_words<I>(words: I) -> LadderResult<Self>
    where
        I: IntoIterator<Item = Word>,
    {
        AdjacencyIndex::build(words).map(Self::new)
    }

    /// The shared index
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Minimal word count and one witness ladder
    ///
    /// # Errors
    /// See [`ShortestDistanceSearch::run`].
    pub fn shortest(&self, begin: &Word, end: &Word) -> LadderResult<ShortestLadder> {
        ShortestDistanceSearch::new(&self.index).run(begin, end)
    }

    /// Every ladder of exactly `length` words
    ///
    /// # Errors
    /// See [`AllShortestPathsEnumerator::enumerate`].
    pub fn all_paths(&self, begin: &Word, end: &Word, length: usize) -> LadderResult<PathSet> {
        AllShortestPathsEnumerator::new(&self.index).enumerate(begin, end, length)
    }

    /// Distance search, then enumeration bounded by the distance found
    ///
    /// # Errors
    /// Any error of the distance search. Enumeration itself cannot fail once
    /// the distance search has accepted the query.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    /// use word_ladder::solver::{LadderSolver, SearchMode};
    /// use word_ladder::wordlists::loader::words_from_slice;
    ///
    /// let solver = LadderSolver::from_words(words_from_slice(&[
    ///     "hit", "hot", "dot", "dog", "cog", "lot", "log",
    /// ]))
    /// .unwrap();
    ///
    /// let begin = Word::new("hit").unwrap();
    /// let end = Word::new("cog").unwrap();
    /// let solution = solver.solve(&begin, &end, SearchMode::AllPaths).unwrap();
    /// assert_eq!(solution.ladder.transformations(), 4);
    /// assert_eq!(solution.paths.unwrap().len(), 2);
    /// ```
    pub fn solve(&self, begin: &Word, end: &Word, mode: SearchMode) -> LadderResult<LadderSolution> {
        let ladder = self.shortest(begin, end)?;

        let enumerator = AllShortestPathsEnumerator::new(&self.index);
        let paths = match mode {
            SearchMode::WitnessOnly => None,
            SearchMode::AllPaths => Some(enumerator.enumerate(begin, end, ladder.word_count)?),
            SearchMode::AllPathsParallel => {
                Some(enumerator.enumerate_parallel(begin, end, ladder.word_count)?)
            }
        };

        Ok(LadderSolution { ladder, paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LadderError;
    use crate::wordlists::loader::words_from_slice;

    fn setup_solver() -> LadderSolver {
        LadderSolver::from_words(words_from_slice(&[
            "hit", "hot", "dot", "dog", "cog", "lot", "log",
        ]))
        .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solve_enumerates_all_paths() {
        let solver = setup_solver();
        let solution = solver
            .solve(&word("hit"), &word("cog"), SearchMode::AllPaths)
            .unwrap();

        assert_eq!(solution.ladder.word_count, 5);
        let paths = solution.paths.unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.paths.contains(&solution.ladder.path));
    }

    #[test]
    fn witness_only_skips_enumeration() {
        let solver = setup_solver();
        let solution = solver
            .solve(&word("hit"), &word("cog"), SearchMode::WitnessOnly)
            .unwrap();

        assert!(solution.paths.is_none());
        assert!(solution.ladder.path.is_ladder());
    }

    #[test]
    fn parallel_mode_agrees() {
        let solver = setup_solver();
        let sequential = solver
            .solve(&word("hit"), &word("cog"), SearchMode::AllPaths)
            .unwrap();
        let parallel = solver
            .solve(&word("hit"), &word("cog"), SearchMode::AllPathsParallel)
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn not_found_outcomes_are_distinct() {
        let solver = LadderSolver::from_words(words_from_slice(&["hit", "hot", "xyz"])).unwrap();

        assert!(matches!(
            solver.solve(&word("hit"), &word("cog"), SearchMode::AllPaths),
            Err(LadderError::NotInDictionary(_))
        ));
        assert!(matches!(
            solver.solve(&word("hit"), &word("xyz"), SearchMode::AllPaths),
            Err(LadderError::Unreachable { .. })
        ));
    }

    #[test]
    fn degenerate_query() {
        let solver = setup_solver();
        let solution = solver
            .solve(&word("dog"), &word("dog"), SearchMode::AllPaths)
            .unwrap();

        assert_eq!(solution.ladder.word_count, 1);
        assert_eq!(solution.paths.unwrap().len(), 1);
    }

    #[test]
    fn mixed_dictionary_rejected() {
        assert!(matches!(
            LadderSolver::from_words(words_from_slice(&["hit", "hits"])),
            Err(LadderError::LengthMismatch { .. })
        ));
    }
}

//! Ladder solving command
//!
//! Solves one start/target pair and returns the shortest ladders found.

use crate::core::Word;
use crate::solver::{LadderResult, LadderSolver, PathSet, SearchMode, ShortestLadder};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub begin: String,
    pub end: String,
    pub mode: SearchMode,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(begin: String, end: String) -> Self {
        Self {
            begin,
            end,
            mode: SearchMode::AllPaths,
        }
    }

    /// Builder: set the search mode
    #[must_use]
    pub const fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub begin: Word,
    pub end: Word,
    pub ladder: ShortestLadder,
    pub paths: Option<PathSet>,
    pub duration: Duration,
}

/// Solve a start/target pair with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (empty or not made of ASCII letters)
/// - Either word does not match the dictionary word length
/// - The target is not in the dictionary, or no ladder reaches it
pub fn solve_ladder(config: SolveConfig, solver: &LadderSolver) -> LadderResult<SolveResult> {
    let begin = Word::new(config.begin)?;
    let end = Word::new(config.end)?;

    let start = Instant::now();
    let solution = solver.solve(&begin, &end, config.mode)?;

    Ok(SolveResult {
        begin,
        end,
        ladder: solution.ladder,
        paths: solution.paths,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LadderError;
    use crate::wordlists::SAMPLE;
    use crate::wordlists::loader::words_from_slice;

    fn sample_solver() -> LadderSolver {
        LadderSolver::from_words(words_from_slice(SAMPLE)).unwrap()
    }

    #[test]
    fn solve_sample_ladder() {
        let solver = sample_solver();
        let config = SolveConfig::new("cat".to_string(), "dog".to_string());

        let result = solve_ladder(config, &solver).unwrap();

        assert_eq!(result.begin.text(), "cat");
        assert_eq!(result.end.text(), "dog");
        assert!(result.ladder.path.is_ladder());

        let paths = result.paths.unwrap();
        assert!(!paths.is_empty());
        for path in &paths.paths {
            assert_eq!(path.word_count(), result.ladder.word_count);
            assert!(path.is_ladder());
            assert!(path.is_simple());
        }
    }

    #[test]
    fn solve_normalizes_case() {
        let solver = sample_solver();
        let config = SolveConfig::new("CAT".to_string(), "Cot".to_string());

        let result = solve_ladder(config, &solver).unwrap();
        assert_eq!(result.ladder.word_count, 2);
    }

    #[test]
    fn witness_only_mode() {
        let solver = sample_solver();
        let config = SolveConfig::new("cat".to_string(), "dog".to_string())
            .mode(SearchMode::WitnessOnly);

        let result = solve_ladder(config, &solver).unwrap();
        assert!(result.paths.is_none());
    }

    #[test]
    fn invalid_word_returns_error() {
        let solver = sample_solver();
        let config = SolveConfig::new("c4t".to_string(), "dog".to_string());

        assert!(matches!(
            solve_ladder(config, &solver),
            Err(LadderError::InvalidWord(_))
        ));
    }

    #[test]
    fn target_outside_dictionary() {
        let solver = sample_solver();
        let config = SolveConfig::new("cat".to_string(), "qqq".to_string());

        assert!(matches!(
            solve_ladder(config, &solver),
            Err(LadderError::NotInDictionary(_))
        ));
    }

    #[test]
    fn wrong_length_query() {
        let solver = sample_solver();
        let config = SolveConfig::new("cats".to_string(), "dogs".to_string());

        assert!(matches!(
            solve_ladder(config, &solver),
            Err(LadderError::LengthMismatch { expected: 3, .. })
        ));
    }
}

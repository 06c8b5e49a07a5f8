//! Word Ladder Solver
//!
//! Finds the minimal number of single-letter changes between two words of a
//! dictionary, and every ladder achieving it.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Word;
//! use word_ladder::solver::{LadderSolver, SearchMode};
//! use word_ladder::wordlists::loader::words_from_slice;
//!
//! let solver = LadderSolver::from_words(words_from_slice(&[
//!     "hit", "hot", "dot", "dog", "cog", "lot", "log",
//! ]))
//! .unwrap();
//!
//! let begin = Word::new("hit").unwrap();
//! let end = Word::new("cog").unwrap();
//! let solution = solver.solve(&begin, &end, SearchMode::AllPaths).unwrap();
//!
//! println!("Best score: {}", solution.ladder.transformations());
//! for path in &solution.paths.unwrap().paths {
//!     println!("{path}");
//! }
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

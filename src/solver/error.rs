//! Error types for ladder searches
//!
//! Every failure is local to one query; the shared index is never touched.

use crate::core::{Word, WordError};
use thiserror::Error;

/// Result type alias for ladder operations.
pub type LadderResult<T> = Result<T, LadderError>;

/// Why a ladder query produced no answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The target word is not a dictionary entry, so no ladder can end there.
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(Word),

    /// The target is in the dictionary but no ladder connects it to the start.
    #[error("no ladder connects '{begin}' to '{end}'")]
    Unreachable { begin: Word, end: Word },

    /// A word does not have the length every other word in the search has.
    #[error("'{word}' has {found} letters, expected {expected}")]
    LengthMismatch {
        word: Word,
        expected: usize,
        found: usize,
    },

    /// Raw input could not be turned into a word.
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}

impl LadderError {
    /// True for the "no solution" outcomes, as opposed to malformed input.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotInDictionary(_) | Self::Unreachable { .. })
    }
}

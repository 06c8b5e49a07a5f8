//! Neighbour listing command
//!
//! Shows which dictionary words are one letter away from a word, grouped by
//! the position that changes.

use crate::core::{Pattern, Word};
use crate::solver::{AdjacencyIndex, LadderResult};

/// Neighbours sharing one wildcard pattern
pub struct PatternGroup {
    pub pattern: Pattern,
    pub words: Vec<Word>,
}

/// Result of listing a word's neighbours
pub struct NeighborReport {
    pub word: Word,
    pub in_dictionary: bool,
    pub groups: Vec<PatternGroup>,
    pub total: usize,
}

/// List the neighbours of `word`
///
/// Patterns with no other word are left out. Words within a group are
/// deduplicated and sorted.
///
/// # Errors
///
/// Returns an error if the word is invalid or its length does not match the
/// dictionary.
pub fn list_neighbors(word: &str, index: &AdjacencyIndex) -> LadderResult<NeighborReport> {
    let word = Word::new(word)?;
    index.check_length(&word)?;

    let groups: Vec<PatternGroup> = word
        .patterns()
        .filter_map(|pattern| {
            let mut words: Vec<Word> = index
                .candidates(&pattern)
                .iter()
                .filter(|&candidate| candidate != &word)
                .cloned()
                .collect();
            words.sort_unstable();
            words.dedup();

            (!words.is_empty()).then_some(PatternGroup { pattern, words })
        })
        .collect();

    let total = groups.iter().map(|g| g.words.len()).sum();

    Ok(NeighborReport {
        in_dictionary: index.contains(&word),
        word,
        groups,
        total,
    })
}

//! Neighbourhood graph command
//!
//! Solves a pair and returns the graph of its shortest ladders plus every
//! word adjacent to them.

use crate::core::Word;
use crate::solver::{LadderGraph, LadderResult, LadderSolver, SearchMode};

/// Graph for one start/target pair
pub struct GraphResult {
    pub begin: Word,
    pub end: Word,
    pub transformations: usize,
    pub ladders: usize,
    pub graph: LadderGraph,
}

/// Build the neighbourhood graph of every shortest ladder from `begin` to `end`
///
/// # Errors
///
/// Returns an error if the query is invalid or has no ladder.
pub fn ladder_graph(begin: &str, end: &str, solver: &LadderSolver) -> LadderResult<GraphResult> {
    let begin = Word::new(begin)?;
    let end = Word::new(end)?;

    let solution = solver.solve(&begin, &end, SearchMode::AllPathsParallel)?;
    let paths = solution.paths.unwrap_or_default();
    let graph = LadderGraph::from_paths(solver.index(), &begin, &end, &paths.paths);

    Ok(GraphResult {
        transformations: solution.ladder.transformations(),
        ladders: paths.len(),
        begin,
        end,
        graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NodeRole;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn graph_for_classic_ladder() {
        let solver = LadderSolver::from_words(words_from_slice(&[
            "hit", "hot", "dot", "dog", "cog", "lot", "log", "hat",
        ]))
        .unwrap();

        let result = ladder_graph("hit", "cog", &solver).unwrap();

        assert_eq!(result.transformations, 4);
        assert_eq!(result.ladders, 2);
        assert_eq!(
            result.graph.role_of(&Word::new("hat").unwrap()),
            Some(NodeRole::Neighbor)
        );
        assert_eq!(result.graph.nodes.len(), 8);
    }

    #[test]
    fn graph_propagates_not_found() {
        let solver = LadderSolver::from_words(words_from_slice(&["hit", "hot"])).unwrap();
        let result = ladder_graph("hit", "cog", &solver);

        assert!(result.is_err_and(|e| e.is_not_found()));
    }
}

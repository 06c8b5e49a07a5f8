//! Word ladder search engine
//!
//! An adjacency index built once from the dictionary, a breadth-first search
//! for the minimal ladder length, and a pruned depth-first enumeration of
//! every ladder of that length.

mod distance;
mod engine;
mod enumerate;
mod error;
pub mod graph;
mod index;

pub use distance::{ShortestDistanceSearch, ShortestLadder};
pub use engine::{LadderSolution, LadderSolver, SearchMode};
pub use enumerate::{
    AllShortestPathsEnumerator, EnumerationStats, PathSet, brute_force_shortest_paths,
};
pub use error::{LadderError, LadderResult};
pub use graph::{GraphEdge, GraphNode, LadderGraph, NodeRole};
pub use index::AdjacencyIndex;

//! Command implementations

pub mod benchmark;
pub mod graph;
pub mod neighbors;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use graph::{GraphResult, ladder_graph};
pub use neighbors::{NeighborReport, PatternGroup, list_neighbors};
pub use solve::{SolveConfig, SolveResult, solve_ladder};

//! Benchmark command
//!
//! Solves random start/target pairs drawn from the dictionary and reports
//! throughput and search effort.

use crate::core::Word;
use crate::solver::{EnumerationStats, LadderSolver, SearchMode, brute_force_shortest_paths};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Seed for reproducible pairs
    pub seed: Option<u64>,
    /// Cross-check every path set against the unpruned reference
    pub verify: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            verify: false,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub solved: usize,
    pub not_found: usize,
    pub average_transformations: f64,
    pub average_ladders: f64,
    pub max_ladders: usize,
    /// Number of queries per transformation count
    pub distribution: HashMap<usize, usize>,
    pub stats: EnumerationStats,
    /// Path sets that disagreed with the reference, when verifying
    pub mismatches: Option<usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Outcome of one benchmark query
struct QueryOutcome {
    transformations: Option<usize>,
    ladders: usize,
    stats: EnumerationStats,
    mismatch: bool,
}

/// Draw `count` random (begin, end) pairs from the dictionary
#[must_use]
pub fn random_pairs(solver: &LadderSolver, count: usize, seed: Option<u64>) -> Vec<(Word, Word)> {
    let words = solver.index().words();
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    (0..count)
        .filter_map(|_| {
            let begin = words.choose(&mut rng)?;
            let end = words.choose(&mut rng)?;
            Some(((*begin).clone(), (*end).clone()))
        })
        .collect()
}

/// Run benchmark on random pairs
pub fn run_benchmark(solver: &LadderSolver, config: &BenchmarkConfig) -> BenchmarkResult {
    let pairs = random_pairs(solver, config.count, config.seed);

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<QueryOutcome> = pairs
        .par_iter()
        .map(|(begin, end)| {
            let outcome = solve_pair(solver, begin, end, config.verify);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&outcomes, config.verify, duration)
}

fn solve_pair(solver: &LadderSolver, begin: &Word, end: &Word, verify: bool) -> QueryOutcome {
    match solver.solve(begin, end, SearchMode::AllPaths) {
        Ok(solution) => {
            let paths = solution.paths.unwrap_or_default();
            let mismatch = verify
                && brute_force_shortest_paths(
                    solver.index(),
                    begin,
                    end,
                    solution.ladder.word_count,
                ) != paths.paths;

            QueryOutcome {
                transformations: Some(solution.ladder.transformations()),
                ladders: paths.len(),
                stats: paths.stats,
                mismatch,
            }
        }
        Err(e) => {
            debug!("benchmark query '{begin}' → '{end}': {e}");
            QueryOutcome {
                transformations: None,
                ladders: 0,
                stats: EnumerationStats::default(),
                mismatch: false,
            }
        }
    }
}

fn summarize(outcomes: &[QueryOutcome], verify: bool, duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut stats = EnumerationStats::default();
    let mut total_transformations = 0;
    let mut total_ladders = 0;
    let mut max_ladders = 0;

    for outcome in outcomes {
        stats += outcome.stats;
        if let Some(transformations) = outcome.transformations {
            *distribution.entry(transformations).or_insert(0) += 1;
            total_transformations += transformations;
            total_ladders += outcome.ladders;
            max_ladders = max_ladders.max(outcome.ladders);
        }
    }

    let solved: usize = distribution.values().sum();
    let average = |total: usize| {
        if solved == 0 {
            0.0
        } else {
            total as f64 / solved as f64
        }
    };

    BenchmarkResult {
        total_queries: outcomes.len(),
        solved,
        not_found: outcomes.len() - solved,
        average_transformations: average(total_transformations),
        average_ladders: average(total_ladders),
        max_ladders,
        distribution,
        stats,
        mismatches: verify.then(|| outcomes.iter().filter(|o| o.mismatch).count()),
        duration,
        queries_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SAMPLE;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            seed: Some(7),
            show_progress: false,
            ..BenchmarkConfig::new(count)
        }
    }

    fn ladder_solver() -> LadderSolver {
        LadderSolver::from_words(words_from_slice(&[
            "hit", "hot", "dot", "dog", "cog", "lot", "log", "xyz",
        ]))
        .unwrap()
    }

    #[test]
    fn random_pairs_are_reproducible() {
        let solver = LadderSolver::from_words(words_from_slice(SAMPLE)).unwrap();

        let first = random_pairs(&solver, 20, Some(42));
        let second = random_pairs(&solver, 20, Some(42));

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert!(first.iter().all(|(b, e)| solver.index().contains(b) && solver.index().contains(e)));
    }

    #[test]
    fn random_pairs_from_empty_dictionary() {
        let solver = LadderSolver::from_words(Vec::new()).unwrap();
        assert!(random_pairs(&solver, 5, Some(1)).is_empty());
    }

    #[test]
    fn benchmark_counts_add_up() {
        let solver = ladder_solver();
        let result = run_benchmark(&solver, &quiet(30));

        assert_eq!(result.total_queries, 30);
        assert_eq!(result.solved + result.not_found, 30);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert!(result.mismatches.is_none());
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let solver = ladder_solver();
        let result = run_benchmark(&solver, &quiet(30));

        // Longest ladder in this dictionary is hit → cog
        assert!(result.distribution.keys().all(|&t| t <= 4));
        if result.solved > 0 {
            assert!(result.average_ladders >= 1.0);
            assert!(result.max_ladders <= 2);
        }
    }

    #[test]
    fn benchmark_verification_finds_no_mismatch() {
        let solver = ladder_solver();
        let config = BenchmarkConfig {
            verify: true,
            ..quiet(25)
        };

        let result = run_benchmark(&solver, &config);
        assert_eq!(result.mismatches, Some(0));
    }

    #[test]
    fn benchmark_empty_run() {
        let solver = ladder_solver();
        let result = run_benchmark(&solver, &quiet(0));

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_transformations.abs() < f64::EPSILON);
    }
}

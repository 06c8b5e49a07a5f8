//! Word Ladder Solver - CLI
//!
//! Shortest word ladders, every ladder of that length, and the graph around them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, ladder_graph, list_neighbors, run_benchmark, solve_ladder,
    },
    core::Word,
    output::{
        print_benchmark_result, print_graph, print_neighbors, print_no_solution,
        print_solve_result,
    },
    solver::{AdjacencyIndex, LadderError, LadderSolver, SearchMode},
    wordlists::{
        SAMPLE,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Finds the shortest word ladders between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'sample' (default, embedded three-letter words) or path to a file
    /// with one word per line or comma-separated words
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladders between two words
    Solve {
        /// Start word
        begin: String,

        /// Target word (must be in the dictionary)
        end: String,

        /// Only find one shortest ladder
        #[arg(long)]
        witness_only: bool,

        /// Enumerate ladders on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Maximum number of ladders to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show search statistics
        #[arg(short = 's', long)]
        stats: bool,
    },

    /// List the words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Show the graph of every shortest ladder and the words next to it
    Graph {
        /// Start word
        begin: String,

        /// Target word (must be in the dictionary)
        end: String,
    },

    /// Solve random pairs from the dictionary
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,

        /// Cross-check every result against an unpruned search (slow)
        #[arg(long)]
        verify: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "sample" => Ok(words_from_slice(SAMPLE)),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_dictionary(&cli.wordlist)?;
    let index = AdjacencyIndex::build(words).context("failed to index the dictionary")?;
    log::info!(
        "dictionary: {} words, {} patterns",
        index.len(),
        index.pattern_count()
    );
    let solver = LadderSolver::new(index);

    match cli.command {
        Commands::Solve {
            begin,
            end,
            witness_only,
            parallel,
            limit,
            stats,
        } => {
            let mode = match (witness_only, parallel) {
                (true, _) => SearchMode::WitnessOnly,
                (false, true) => SearchMode::AllPathsParallel,
                (false, false) => SearchMode::AllPaths,
            };
            run_solve_command(&solver, SolveConfig::new(begin, end).mode(mode), stats, limit)
        }
        Commands::Neighbors { word } => {
            let report = list_neighbors(&word, solver.index())?;
            print_neighbors(&report);
            Ok(())
        }
        Commands::Graph { begin, end } => match ladder_graph(&begin, &end, &solver) {
            Ok(result) => {
                print_graph(&result);
                Ok(())
            }
            Err(e) => report_no_solution(e),
        },
        Commands::Benchmark {
            count,
            seed,
            verify,
        } => {
            println!("Running benchmark on {count} random pairs...");
            let config = BenchmarkConfig {
                seed,
                verify,
                ..BenchmarkConfig::new(count)
            };
            let result = run_benchmark(&solver, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &LadderSolver,
    config: SolveConfig,
    verbose: bool,
    limit: Option<usize>,
) -> Result<()> {
    match solve_ladder(config, solver) {
        Ok(result) => {
            print_solve_result(&result, verbose, limit);
            Ok(())
        }
        Err(e) => report_no_solution(e),
    }
}

/// A missing ladder is a normal answer; malformed input is an error
fn report_no_solution(error: LadderError) -> Result<()> {
    if error.is_not_found() {
        print_no_solution(&error);
        Ok(())
    } else {
        Err(error.into())
    }
}

//! Display functions for command results

use super::formatters::{colored_path, pruning_bar, role_label};
use crate::commands::{BenchmarkResult, GraphResult, NeighborReport, SolveResult};
use crate::solver::{LadderError, NodeRole};
use colored::Colorize;

/// Print the result of solving a ladder
///
/// `limit` caps how many of the shortest ladders are listed.
pub fn print_solve_result(result: &SolveResult, verbose: bool, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.begin.text().to_uppercase().red().bold(),
        result.end.text().to_uppercase().green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n{} {} ({} words)",
        "Best score:".bright_cyan().bold(),
        result.ladder.transformations().to_string().bright_yellow().bold(),
        result.ladder.word_count
    );
    println!("Witness:    {}", colored_path(&result.ladder.path));

    if let Some(paths) = &result.paths {
        println!(
            "\n{} {}",
            "Possible shortest ladders:".bright_cyan().bold(),
            paths.len()
        );

        let shown = limit.unwrap_or(paths.len());
        for (i, path) in paths.paths.iter().take(shown).enumerate() {
            println!("  {:>3}. {}", i + 1, colored_path(path));
        }
        if shown < paths.len() {
            println!("  … {} more", paths.len() - shown);
        }

        if verbose {
            let stats = paths.stats;
            println!("\n📊 {}", "Search effort:".bright_cyan().bold());
            println!("   Explored:   {}", stats.explored);
            println!(
                "   Pruned:     [{}] {}",
                pruning_bar(stats.pruned, stats.explored, 30).green(),
                stats.pruned
            );
            println!("   Completed:  {}", stats.completed);
        }
    }

    if verbose {
        println!("   Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print a query that produced no ladder
pub fn print_no_solution(error: &LadderError) {
    println!("\n{}", format!("❌ No solution found: {error}").red().bold());
}

/// Print the neighbours of a word
pub fn print_neighbors(report: &NeighborReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOURS:".bright_cyan().bold(),
        report.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.in_dictionary {
        println!("\n{}", "(not in dictionary)".bright_black());
    }

    for group in &report.groups {
        let words: Vec<&str> = group.words.iter().map(|w| w.text()).collect();
        println!("\n   {}  {}", group.pattern.to_string().magenta(), words.join(", "));
    }

    println!("\n{} neighbours", report.total.to_string().bright_yellow());
}

/// Print the neighbourhood graph of a ladder query
pub fn print_graph(result: &GraphResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "LADDER GRAPH:".bright_cyan().bold(),
        result.begin.text().to_uppercase().red().bold(),
        result.end.text().to_uppercase().green().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n{} shortest ladders of {} steps",
        result.ladders, result.transformations
    );

    println!("\n📍 {} ({})", "Nodes".bright_cyan().bold(), result.graph.nodes.len());
    for node in &result.graph.nodes {
        let text = node.word.text();
        let word = match node.role {
            NodeRole::Start => text.red().bold(),
            NodeRole::Target => text.green().bold(),
            NodeRole::OnPath => text.magenta(),
            NodeRole::Neighbor => text.normal(),
        };
        println!("   {word:<8} {}", role_label(node.role).bright_black());
    }

    println!(
        "\n🔗 {} ({}, {} on ladders)",
        "Edges".bright_cyan().bold(),
        result.graph.edges.len(),
        result.graph.on_path_edges()
    );
    for edge in &result.graph.edges {
        let line = format!("   {} — {}", edge.from, edge.to);
        if edge.on_path {
            println!("{}", line.magenta());
        } else {
            println!("{line}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   No ladder:        {}",
        result.not_found.to_string().yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_transformations)
            .bright_yellow()
            .bold()
    );
    println!("   Average ladders:  {:.2}", result.average_ladders);
    println!("   Most ladders:     {}", result.max_ladders);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    println!("\n🔍 {}", "Search effort:".bright_cyan().bold());
    println!("   Explored:         {}", result.stats.explored);
    println!(
        "   Pruned:           [{}] {}",
        pruning_bar(result.stats.pruned, result.stats.explored, 30).green(),
        result.stats.pruned
    );
    if let Some(mismatches) = result.mismatches {
        let verdict = if mismatches == 0 {
            "all path sets match the unpruned search".green()
        } else {
            format!("{mismatches} path sets differ from the unpruned search").red()
        };
        println!("   Verification:     {verdict}");
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut steps: Vec<_> = result.distribution.keys().copied().collect();
    steps.sort_unstable();
    for step in steps {
        let count = result.distribution[&step];
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {step:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

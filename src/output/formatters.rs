//! Formatting utilities for terminal output

use crate::core::Path;
use crate::solver::NodeRole;
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of explored partial ladders removed by pruning, as a bar
#[must_use]
pub fn pruning_bar(pruned: usize, explored: usize, width: usize) -> String {
    create_progress_bar(pruned as f64, explored as f64, width)
}

/// Path with the start in red, the target in green, and arrows dimmed
#[must_use]
pub fn colored_path(path: &Path) -> String {
    let last = path.word_count() - 1;
    let arrow = " → ".bright_black().to_string();

    path.iter()
        .enumerate()
        .map(|(i, word)| {
            let text = word.text().to_uppercase();
            if i == 0 {
                text.red().bold().to_string()
            } else if i == last {
                text.green().bold().to_string()
            } else {
                text.magenta().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(arrow.as_str())
}

/// Short label for a graph node role
#[must_use]
pub const fn role_label(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Start => "start",
        NodeRole::Target => "target",
        NodeRole::OnPath => "ladder",
        NodeRole::Neighbor => "neighbour",
    }
}

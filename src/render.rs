// Fixed-width rendering of final rankings for terminal output.

use std::fmt::Write;

use crate::ranking::pipeline::RankedEntry;

const BANNER_WIDTH: usize = 80;
/// Names longer than this are truncated with a ".." suffix.
const MAX_NAME_LEN: usize = 28;

/// Render the ranked entries as a fixed-width table.
pub fn render_rankings(entries: &[RankedEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(out, "FINAL RANKINGS");
    let _ = writeln!(out, "{}", "=".repeat(BANNER_WIDTH));
    let _ = writeln!(
        out,
        "{:<4} {:<30} {:<12} {:<12}",
        "Rank", "Player", "Total Points", "Total Spent"
    );
    let _ = writeln!(out, "{}", "-".repeat(BANNER_WIDTH));

    for entry in entries {
        let _ = writeln!(
            out,
            "{:<4} {:<30} {:<12} {:<12}",
            entry.rank,
            display_name(&entry.competitor.name),
            format!("{:.0}", entry.total_points),
            format!("{:.2}", entry.total_spent),
        );
    }

    out
}

fn display_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LEN {
        let truncated: String = name.chars().take(MAX_NAME_LEN).collect();
        format!("{truncated}..")
    } else {
        name.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

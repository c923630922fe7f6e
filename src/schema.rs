// Heuristic column discovery.
//
// Leaderboard sheets come with inconsistent headers, so the relevant columns
// are found by keyword rather than by position. Kept separate from the
// ranking engine: this is best-effort guessing, the engine is exact.

use tracing::debug;

use crate::table::Table;

const PLAYER_KEYWORDS: &[&str] = &["player", "name", "team"];
const TOTAL_KEYWORDS: &[&str] = &["total", "points", "score"];
const SPENT_KEYWORDS: &[&str] = &["spent", "cost", "money"];

/// Maximum header length for a round column label ("R1" through "R999").
const MAX_ROUND_LABEL_LEN: usize = 4;

/// Detected column layout. Aggregate columns are optional; the ranking
/// pipeline computes substitutes when they are absent. `rounds` is ordered
/// by label so round scores land in canonical round order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub player: usize,
    pub total_points: Option<usize>,
    pub total_spent: Option<usize>,
    pub rounds: Vec<usize>,
}

/// Detect the player, total-points, total-spent, and round columns.
///
/// Each keyword scan takes the first header containing any keyword
/// (case-insensitive substring match). When no header looks like a player
/// column, the second column is assumed to hold names, mirroring the usual
/// sheet layout of rank-then-name.
pub fn detect_columns(table: &Table) -> ColumnMap {
    let player = find_by_keywords(&table.headers, PLAYER_KEYWORDS)
        .unwrap_or(if table.headers.len() > 1 { 1 } else { 0 });
    let total_points = find_by_keywords(&table.headers, TOTAL_KEYWORDS);
    let total_spent = find_by_keywords(&table.headers, SPENT_KEYWORDS);

    let mut round_labels: Vec<(&str, usize)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| is_round_label(h))
        .map(|(i, h)| (h.as_str(), i))
        .collect();
    round_labels.sort();
    let rounds = round_labels.into_iter().map(|(_, i)| i).collect();

    let map = ColumnMap {
        player,
        total_points,
        total_spent,
        rounds,
    };
    debug!(?map, "detected columns");
    map
}

fn find_by_keywords(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let lower = h.to_lowercase();
        keywords.iter().any(|k| lower.contains(k))
    })
}

/// A round label is `R` followed only by digits, at most 4 characters total
/// (R1, R01, R12, R999).
fn is_round_label(header: &str) -> bool {
    let header = header.trim();
    if header.len() > MAX_ROUND_LABEL_LEN {
        return false;
    }
    match header.strip_prefix('R') {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

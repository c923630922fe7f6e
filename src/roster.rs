// Row filtering and competitor construction.
//
// Sheets carry more than competitor rows: summary lines, repeated headers,
// blanks, and the odd duplicate. This layer strips them and hands the
// ranking engine a clean set of distinct competitors.

use std::collections::HashSet;

use tracing::warn;

use crate::ranking::normalize::{normalize, RawScore};
use crate::ranking::pipeline::Competitor;
use crate::schema::ColumnMap;
use crate::table::Table;

/// Row labels that mark summary or repeated-header rows, matched
/// case-insensitively against the trimmed name cell.
const EXCLUDED_NAMES: &[&str] = &["points totals", "spending totals", "player"];

/// Build the competitor set from a loaded table and its detected columns.
///
/// Dropped rows: empty names, purely numeric names, summary and repeated
/// header rows, and duplicate names (first occurrence kept). Names are
/// trimmed but otherwise case-preserved.
pub fn build_competitors(table: &Table, columns: &ColumnMap) -> Vec<Competitor> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut competitors = Vec::new();

    for row_idx in 0..table.rows.len() {
        let name = table.cell(row_idx, columns.player).unwrap_or("").trim();

        if name.is_empty() {
            continue;
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            warn!(row = row_idx, name, "skipping numeric-only name");
            continue;
        }
        let lower = name.to_lowercase();
        if EXCLUDED_NAMES.contains(&lower.as_str()) {
            continue;
        }
        if !seen.insert(name.to_string()) {
            warn!(row = row_idx, name, "skipping duplicate name");
            continue;
        }

        let round_scores = columns
            .rounds
            .iter()
            .map(|&col| raw_cell(table, row_idx, col))
            .collect();
        let total_points = columns
            .total_points
            .map(|col| normalize(&raw_cell(table, row_idx, col)));
        let total_spent = columns
            .total_spent
            .map(|col| normalize(&raw_cell(table, row_idx, col)));

        competitors.push(Competitor {
            name: name.to_string(),
            round_scores,
            total_points,
            total_spent,
        });
    }

    competitors
}

fn raw_cell(table: &Table, row: usize, column: usize) -> RawScore {
    match table.cell(row, column) {
        None => RawScore::Missing,
        Some(cell) if cell.trim().is_empty() => RawScore::Missing,
        Some(cell) => RawScore::Text(cell.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

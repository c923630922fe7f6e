// Raw cell normalization.
//
// Leaderboard sheets are free-form: round cells contain numbers, blanks,
// dashes, and disqualification markers. Every cell must map to a definite
// numeric score, so `normalize` is a total function — it never fails.

use serde::{Deserialize, Serialize};

/// A raw score cell as the engine receives it from the table layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawScore {
    /// Empty or absent cell.
    Missing,
    /// Cell that was already numeric at the source.
    Number(f64),
    /// Free-form cell content.
    Text(String),
}

/// Tokens that mean "no score": the disqualification marker and a bare dash.
const PLACEHOLDERS: &[&str] = &["-", "D$Q"];

/// Convert a raw cell into a definite numeric score.
///
/// Rules, applied in order:
/// 1. Missing/empty input is 0.
/// 2. A placeholder token ("-" or "D$Q") is 0.
/// 3. Numeric input keeps its value (negatives preserved, non-finite
///    degraded to 0).
/// 4. Text forming a plain number (one optional leading minus, at most one
///    decimal point, digits otherwise) parses to its value.
/// 5. Anything else is 0.
///
/// The result is always finite. Zero conflates "scored zero" with "did not
/// play"; that loss is accepted, countback discards zeros either way.
pub fn normalize(raw: &RawScore) -> f64 {
    match raw {
        RawScore::Missing => 0.0,
        RawScore::Number(n) if n.is_finite() => *n,
        RawScore::Number(_) => 0.0,
        RawScore::Text(s) => {
            let s = s.trim();
            if s.is_empty() || PLACEHOLDERS.contains(&s) {
                return 0.0;
            }
            if !is_plain_number(s) {
                return 0.0;
            }
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => 0.0,
            }
        }
    }
}

/// Accepts one optional leading minus, at most one decimal point, and at
/// least one digit; every other character disqualifies the string.
fn is_plain_number(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let mut dots = 0;
    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

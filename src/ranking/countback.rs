// Countback comparison: orders two competitors by their best individual
// rounds rather than their totals.

use std::cmp::Ordering;

use crate::ranking::normalize::{normalize, RawScore};

/// A competitor's countback sequence: positive normalized round scores,
/// sorted descending. Zero and invalid rounds do not participate.
pub fn positive_scores(rounds: &[RawScore]) -> Vec<f64> {
    let mut scores: Vec<f64> = rounds
        .iter()
        .map(normalize)
        .filter(|s| *s > 0.0)
        .collect();
    scores.sort_by(|x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal));
    scores
}

/// Three-way countback comparison over two descending-sorted positive score
/// sequences. `Less` means the first sequence ranks ahead.
///
/// Walk both sequences position by position: the larger value at the first
/// divergence wins; a competitor that still holds a value where the other
/// has run out wins (an extra strong round is an advantage). When every
/// compared position is equal, fall back to frequency of the shared best
/// score: whoever posted it more often wins. Both empty, or equal
/// frequency, compares `Equal`.
///
/// Not guaranteed transitive across arbitrary sequences; callers must scope
/// it to a single points-and-spend-tied bucket.
pub fn countback(a: &[f64], b: &[f64]) -> Ordering {
    let positions = a.len().max(b.len());
    for i in 0..positions {
        match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => {
                if x > y {
                    return Ordering::Less;
                }
                if x < y {
                    return Ordering::Greater;
                }
            }
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => break,
        }
    }

    if let (Some(&fa), Some(&fb)) = (a.first(), b.first()) {
        let best = fa.max(fb);
        let count_a = a.iter().filter(|v| **v == best).count();
        let count_b = b.iter().filter(|v| **v == best).count();
        // More occurrences of the best score ranks ahead.
        return count_b.cmp(&count_a);
    }

    Ordering::Equal
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Ranking pipeline: totals, descending sort, per-bucket tie-break
// resolution, sequential rank assignment.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::ranking::countback::positive_scores;
use crate::ranking::normalize::{normalize, RawScore};
use crate::ranking::tiebreak::{resolve_ties, BucketMember};

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// One competitor row, as produced by the roster layer.
///
/// `round_scores` is in canonical round order and aligned across all
/// competitors. `total_points`/`total_spent` are `None` when the source
/// table had no such column; the pipeline computes substitutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub round_scores: Vec<RawScore>,
    pub total_points: Option<f64>,
    pub total_spent: Option<f64>,
}

/// Final ranking entry. Ranks are a gapless permutation of 1..=N; fully
/// tied competitors still receive distinct rank numbers (fixed policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub competitor: Competitor,
    pub total_points: f64,
    pub total_spent: f64,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Rank a set of competitors into a strict total order.
///
/// Steps:
/// 1. Resolve totals: supplied `total_points`, or the sum of normalized
///    round scores; supplied `total_spent`, or 0.
/// 2. Stable sort descending by total points. Input order is the ordering
///    of last resort among ties, until alphabetical grouping applies.
/// 3. Bucket competitors sharing a total-points value and resolve each
///    bucket through the spend/countback/name cascade.
/// 4. Assign ranks 1..=N over the concatenation.
///
/// There is no failure path: empty input yields empty output, malformed
/// cells were already absorbed by normalization.
pub fn rank(competitors: &[Competitor]) -> Vec<RankedEntry> {
    let mut scored: Vec<(f64, BucketMember)> = competitors
        .iter()
        .enumerate()
        .map(|(index, c)| {
            let total = c
                .total_points
                .unwrap_or_else(|| c.round_scores.iter().map(normalize).sum());
            let member = BucketMember {
                index,
                spent: c.total_spent.unwrap_or(0.0),
                positive: positive_scores(&c.round_scores),
                sort_name: c.name.to_lowercase(),
            };
            (total, member)
        })
        .collect();

    // Stable descending sort on the primary key only; totals are finite.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut ordered: Vec<(f64, BucketMember)> = Vec::with_capacity(scored.len());
    let mut iter = scored.into_iter();
    if let Some(first) = iter.next() {
        let mut bucket_total = first.0;
        let mut bucket = vec![first.1];
        for (total, member) in iter {
            if total == bucket_total {
                bucket.push(member);
            } else {
                drain_bucket(bucket_total, bucket, &mut ordered);
                bucket_total = total;
                bucket = vec![member];
            }
        }
        drain_bucket(bucket_total, bucket, &mut ordered);
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, (total, member))| RankedEntry {
            rank: position + 1,
            total_points: total,
            total_spent: member.spent,
            competitor: competitors[member.index].clone(),
        })
        .collect()
}

fn drain_bucket(total: f64, bucket: Vec<BucketMember>, out: &mut Vec<(f64, BucketMember)>) {
    // Singleton buckets skip resolution entirely.
    if bucket.len() == 1 {
        out.extend(bucket.into_iter().map(|m| (total, m)));
    } else {
        out.extend(resolve_ties(bucket).into_iter().map(|m| (total, m)));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Tie-break resolution for a bucket of competitors sharing the same total
// points: spend first (lower spend ranks ahead), then countback, then name.

use std::cmp::Ordering;

use crate::ranking::countback::countback;

/// Working record for one competitor inside a tie-break bucket.
///
/// `index` is the competitor's position in the caller's slice; resolution
/// reorders these records and never touches the competitors themselves, so
/// identity survives any amount of shuffling.
#[derive(Debug, Clone)]
pub struct BucketMember {
    pub index: usize,
    pub spent: f64,
    /// Positive normalized round scores, sorted descending.
    pub positive: Vec<f64>,
    /// Lowercased name for the case-insensitive alphabetical fallback.
    pub sort_name: String,
}

/// Resolve a bucket of points-tied competitors into a definite order.
///
/// Partitions the bucket by spend, orders partitions ascending (did more
/// with less), applies the grouped countback sort within each multi-member
/// partition, and concatenates. A singleton bucket passes through with no
/// comparisons.
pub fn resolve_ties(bucket: Vec<BucketMember>) -> Vec<BucketMember> {
    if bucket.len() <= 1 {
        return bucket;
    }

    // Stable sort by spend keeps input order inside each partition; spend
    // values are normalized and therefore finite.
    let mut members = bucket;
    members.sort_by(|a, b| a.spent.partial_cmp(&b.spent).unwrap_or(Ordering::Equal));

    let mut resolved = Vec::with_capacity(members.len());
    let mut iter = members.into_iter();
    let mut partition = vec![iter.next().expect("bucket is non-empty")];

    for member in iter {
        if member.spent == partition[0].spent {
            partition.push(member);
        } else {
            flush_partition(partition, &mut resolved);
            partition = vec![member];
        }
    }
    flush_partition(partition, &mut resolved);

    resolved
}

fn flush_partition(partition: Vec<BucketMember>, out: &mut Vec<BucketMember>) {
    if partition.len() == 1 {
        out.extend(partition);
    } else {
        out.extend(sort_by_countback(partition));
    }
}

/// Order a spend-tied partition by countback, breaking remaining ties
/// alphabetically.
///
/// The sort is a stable exchange sort on purpose: the countback comparator
/// is not a total order, and the standard library sort may reject
/// comparators that violate ordering consistency. After sorting, runs of
/// members countback-equal to the FIRST member of the run (not the pairwise
/// neighbor — the comparator is not transitive, so the anchor matters) are
/// reordered alphabetically by case-insensitive name.
pub fn sort_by_countback(members: Vec<BucketMember>) -> Vec<BucketMember> {
    if members.len() <= 1 {
        return members;
    }

    let mut members = members;
    exchange_sort(&mut members);

    let mut sorted = Vec::with_capacity(members.len());
    let mut iter = members.into_iter();
    let mut run = vec![iter.next().expect("partition is non-empty")];

    for member in iter {
        if countback(&run[0].positive, &member.positive) == Ordering::Equal {
            run.push(member);
        } else {
            flush_run(run, &mut sorted);
            run = vec![member];
        }
    }
    flush_run(run, &mut sorted);

    sorted
}

/// Stable bubble sort; makes no assumption beyond the comparator being a
/// consistent three-way function on each invoked pair.
fn exchange_sort(members: &mut [BucketMember]) {
    let n = members.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if countback(&members[j].positive, &members[j + 1].positive) == Ordering::Greater {
                members.swap(j, j + 1);
            }
        }
    }
}

fn flush_run(mut run: Vec<BucketMember>, out: &mut Vec<BucketMember>) {
    if run.len() > 1 {
        run.sort_by(|a, b| a.sort_name.cmp(&b.sort_name));
    }
    out.extend(run);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

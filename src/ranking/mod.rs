// Ranking engine: cell normalization, countback comparison, grouped
// tie-break resolution, and the rank-assignment pipeline.

pub mod countback;
pub mod normalize;
pub mod pipeline;
pub mod tiebreak;

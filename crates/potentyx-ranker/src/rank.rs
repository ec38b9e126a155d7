//! Potency ranking of combined measurements.

use potentyx_common::{Measurement, RankedCandidate};
use tracing::info;

/// Size of the candidate table when no override is configured.
pub const DEFAULT_TOP_N: usize = 20;

/// Stable descending sort by pIC50: equal values keep their input order.
pub fn sort_by_potency(measurements: &[Measurement]) -> Vec<Measurement> {
    let mut sorted = measurements.to_vec();
    sorted.sort_by(|a, b| b.pic50.total_cmp(&a.pic50));
    sorted
}

/// Select the `top_n` most potent measurements and attach their interpretation.
///
/// Returns `min(top_n, measurements.len())` rows, most potent first.
pub fn rank_candidates(measurements: &[Measurement], top_n: usize) -> Vec<RankedCandidate> {
    let mut sorted = sort_by_potency(measurements);
    sorted.truncate(top_n);

    let ranked: Vec<RankedCandidate> = sorted.into_iter().map(RankedCandidate::from).collect();
    info!(
        considered = measurements.len(),
        selected = ranked.len(),
        best_pic50 = ranked.first().map(|c| c.pic50),
        "Ranked candidates"
    );
    ranked
}

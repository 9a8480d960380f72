//! Candidate ranking around a geographic center.
//!
//! Every candidate in the pool is scored against the center and the list is
//! sorted best-first. Distance enters the score in normalized inverse form:
//! the nearest candidate gets 1, the farthest 0, everything else linear in
//! between. The normalization is relative to the pool itself, so the same
//! case can score differently as the pool changes.

use tracing::debug;

use crate::geo::{self, LatLng};
use crate::model::{Case, FraudScores, ScoredCase};
use crate::scoring::Weights;

/// Default cap on ranked suggestions handed out per call.
///
/// Also bounds the open-route search: each evaluated route draws from the
/// top suggestions only, which keeps the per-start work constant-sized.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;

/// Scores the whole pool against `center` and sorts it best-first.
///
/// Ties keep pool order (the sort is stable). An empty pool yields an
/// empty list. When every candidate sits on the center, all normalized
/// inverse distances are 0 rather than 1, so ranking degrades to fraud
/// and priority alone.
pub(crate) fn score_pool(
    center: LatLng,
    pool: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
) -> Vec<ScoredCase> {
    let positions: Vec<LatLng> = pool.iter().map(|case| case.position).collect();
    let distances = geo::distances_from(center, &positions);
    let max_distance = distances.iter().copied().fold(0.0_f64, f64::max);

    let mut scored: Vec<ScoredCase> = pool
        .iter()
        .zip(distances)
        .map(|(case, distance_m)| {
            let normalized_inverse_distance = if max_distance > 0.0 {
                (max_distance - distance_m) / max_distance
            } else {
                0.0
            };
            let fraud_probability = fraud
                .probability_for(&case.id)
                .or(case.fraud_probability)
                .unwrap_or(0.0);
            let score = weights.score(
                normalized_inverse_distance,
                fraud_probability,
                case.priority_weight,
            );
            ScoredCase {
                case: case.clone(),
                distance_m,
                normalized_inverse_distance,
                fraud_probability,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Ranks the pool around `center` and returns at most `limit` candidates.
pub fn rank(
    center: LatLng,
    pool: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
    limit: usize,
) -> Vec<ScoredCase> {
    let mut ranked = score_pool(center, pool, fraud, weights);
    if ranked.len() > limit {
        ranked.truncate(limit);
    }
    debug!(
        pool = pool.len(),
        returned = ranked.len(),
        "ranked candidates around center"
    );
    ranked
}

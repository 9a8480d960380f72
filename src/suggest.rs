//! Single-case suggestions.
//!
//! The "what could be visited next" view: a ranked candidate list, no
//! shortening, no parallel search.

use std::collections::HashSet;

use tracing::debug;

use crate::geo::{self, LatLng};
use crate::model::{Case, CaseId, FraudScores, Route, ScoredCase};
use crate::pool::remove_excluded;
use crate::ranking::{self, DEFAULT_SUGGESTION_LIMIT};
use crate::scoring::Weights;

/// Ranked suggestions around a center, capped at the default limit.
pub fn suggest(
    center: LatLng,
    pool: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
) -> Vec<ScoredCase> {
    ranking::rank(center, pool, fraud, weights, DEFAULT_SUGGESTION_LIMIT)
}

/// Suggestions for extending an existing route.
///
/// Ranks around the route's own geographic center (the mean of its member
/// positions), or `fallback_center` when the route is empty. The route's
/// members and the ids in `committed` are never suggested. Unlike
/// [`suggest`], the result is ordered nearest-first, matching how a route
/// under construction is presented.
pub fn suggest_for_route(
    route: &Route,
    fallback_center: LatLng,
    pool: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
    committed: &HashSet<CaseId>,
) -> Vec<ScoredCase> {
    let positions: Vec<LatLng> = route.cases.iter().map(|c| c.case.position).collect();
    let center = geo::center_of(&positions).unwrap_or(fallback_center);

    let mut excluded = committed.clone();
    excluded.extend(route.ids().cloned());
    let eligible = remove_excluded(pool.to_vec(), &excluded);

    let mut suggestions = ranking::rank(center, &eligible, fraud, weights, DEFAULT_SUGGESTION_LIMIT);
    suggestions.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    debug!(
        route_len = route.len(),
        suggested = suggestions.len(),
        "ranked add-on suggestions for route"
    );
    suggestions
}

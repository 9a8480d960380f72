//! Route generation.
//!
//! Two modes, selected by [`GenerationCriteria`]. With a fixed starting
//! case the route is assembled directly around it. Without one, every
//! eligible case (or a capped top-K subset) is tried as a starting point:
//! each start gets its own ranked-and-shortened route, evaluated in
//! parallel, and the best-scoring route wins.
//!
//! Workers share nothing mutable. Each evaluation reads the same pool and
//! fraud snapshots and allocates its own intermediate lists, so results
//! depend only on the inputs. The reduce step walks candidate routes in
//! starting-point order and keeps the first strict maximum, which makes
//! score ties reproducible across runs regardless of worker timing.

use std::collections::HashSet;
use std::thread;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::model::{Case, CaseId, FraudScores, Route, ScoredCase};
use crate::pool::{dedupe_by_id, remove_excluded};
use crate::ranking::{self, DEFAULT_SUGGESTION_LIMIT};
use crate::scoring::Weights;
use crate::shorten::shorten;

/// Production default number of visits per generated itinerary.
pub const DEFAULT_TARGET_LENGTH: usize = 8;

/// Knobs for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationCriteria {
    /// Intended route length, at least 1. Address merging may exceed it.
    pub target_length: usize,
    /// Start the route at this case instead of searching for a start.
    pub fixed_start_case_id: Option<CaseId>,
    /// Cases already committed elsewhere today, removed before scoring.
    pub exclude_case_ids: HashSet<CaseId>,
    /// Evaluate at most this many starting points, picked by fraud and
    /// priority alone. 0 tries every eligible case.
    pub top_candidates_cap: usize,
}

impl Default for GenerationCriteria {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            fixed_start_case_id: None,
            exclude_case_ids: HashSet::new(),
            top_candidates_cap: 0,
        }
    }
}

/// Generates the best-scoring route for `criteria` from the given pool.
///
/// The pool and fraud lookup are read-only snapshots for the duration of
/// the call. Duplicate pool ids are collapsed (first occurrence wins) and
/// excluded ids are dropped before any scoring. An empty eligible pool
/// yields an empty route, not an error.
pub fn generate(
    pool: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
    criteria: &GenerationCriteria,
) -> Result<Route> {
    if criteria.target_length == 0 {
        return Err(Error::invalid_criteria("target length must be at least 1"));
    }

    let deduped = dedupe_by_id(pool.to_vec());

    if let Some(start_id) = &criteria.fixed_start_case_id {
        // The fixed start takes part even when it appears in the exclusion
        // set; exclusions only thin out the rest of the pool.
        let start = deduped
            .iter()
            .find(|case| &case.id == start_id)
            .cloned()
            .ok_or_else(|| Error::UnknownStartCase(start_id.clone()))?;
        let eligible = remove_excluded(deduped, &criteria.exclude_case_ids);
        return Ok(fixed_start_route(start, eligible, fraud, weights, criteria));
    }

    let eligible = remove_excluded(deduped, &criteria.exclude_case_ids);
    open_search(&eligible, fraud, weights, criteria)
}

/// Assembles a route around a caller-chosen starting case.
///
/// Suggestions are ranked centered on the start with the start in the
/// pool, so it occupies one of the capped slots just like any other
/// candidate. It is then filtered back out and put in front, and the
/// rest is cut to `target_length - 1`. No parallel search runs and no
/// presentation re-sort happens in this mode: after the start, members
/// stay in ranked order.
fn fixed_start_route(
    start: Case,
    eligible: Vec<Case>,
    fraud: &FraudScores,
    weights: &Weights,
    criteria: &GenerationCriteria,
) -> Route {
    let mut scoring_pool = eligible;
    if !scoring_pool.iter().any(|case| case.id == start.id) {
        scoring_pool.push(start.clone());
    }
    let ranked = ranking::score_pool(start.position, &scoring_pool, fraud, weights);

    let mut cases: Vec<ScoredCase> = Vec::with_capacity(criteria.target_length);
    cases.push(start_entry(&start, &ranked, fraud, weights));
    cases.extend(
        ranked
            .into_iter()
            .take(DEFAULT_SUGGESTION_LIMIT)
            .filter(|scored| scored.id() != &start.id)
            .take(criteria.target_length - 1),
    );

    debug!(
        start = %start.id,
        len = cases.len(),
        "assembled fixed-start route"
    );
    Route::from_cases(cases)
}

/// The start's own scored entry. Its distance to itself is zero, so its
/// normalized inverse distance is 1 whenever the pool has any spread at
/// all, and 0 in the fully co-located degenerate case.
fn start_entry(
    start: &Case,
    ranked: &[ScoredCase],
    fraud: &FraudScores,
    weights: &Weights,
) -> ScoredCase {
    let normalized_inverse_distance = if ranked.iter().any(|c| c.distance_m > 0.0) {
        1.0
    } else {
        0.0
    };
    let fraud_probability = fraud
        .probability_for(&start.id)
        .or(start.fraud_probability)
        .unwrap_or(0.0);
    let score = weights.score(
        normalized_inverse_distance,
        fraud_probability,
        start.priority_weight,
    );
    ScoredCase {
        case: start.clone(),
        distance_m: 0.0,
        normalized_inverse_distance,
        fraud_probability,
        score,
    }
}

/// Tries starting points in parallel and keeps the best-scoring route.
fn open_search(
    eligible: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
    criteria: &GenerationCriteria,
) -> Result<Route> {
    if eligible.is_empty() {
        warn!("no eligible cases to route");
        return Ok(Route::empty());
    }

    let starts = starting_points(eligible, fraud, weights, criteria.top_candidates_cap);
    let workers = worker_count();
    info!(
        eligible = eligible.len(),
        starts = starts.len(),
        workers,
        target = criteria.target_length,
        "searching for best route"
    );

    let worker_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::other(format!("worker pool: {e}")))?;

    // Indexed parallel iteration keeps `candidates` in starting-point
    // order, which the first-max reduce below relies on.
    let candidates: Vec<Route> = worker_pool.install(|| {
        starts
            .par_iter()
            .map(|&start| evaluate_start(start, eligible, fraud, weights, criteria.target_length))
            .collect::<Result<Vec<Route>>>()
    })?;

    let mut best = Route::empty();
    for candidate in candidates {
        if best.is_empty() || candidate.score > best.score {
            best = candidate;
        }
    }

    sort_for_presentation(&mut best.cases);
    info!(score = best.score, len = best.len(), "selected best route");
    Ok(best)
}

/// Picks the starting-point set for the open search.
///
/// With a cap, the pool is pre-scored once by fraud and priority alone
/// (no distance, since a start has none yet) and only the top `cap`
/// cases are tried. Ties keep pool order.
fn starting_points<'a>(
    eligible: &'a [Case],
    fraud: &FraudScores,
    weights: &Weights,
    cap: usize,
) -> Vec<&'a Case> {
    if cap == 0 || eligible.len() <= cap {
        return eligible.iter().collect();
    }

    let mut by_proxy: Vec<(&Case, f64)> = eligible
        .iter()
        .map(|case| {
            let fraud_probability = fraud
                .probability_for(&case.id)
                .or(case.fraud_probability)
                .unwrap_or(0.0);
            let proxy = weights.score(0.0, fraud_probability, case.priority_weight);
            (case, proxy)
        })
        .collect();
    by_proxy.sort_by(|a, b| b.1.total_cmp(&a.1));
    by_proxy.truncate(cap);
    debug!(cap, "capped starting-point set by fraud and priority");
    by_proxy.into_iter().map(|(case, _)| case).collect()
}

/// One unit of parallel work: the full route grown from one start.
fn evaluate_start(
    start: &Case,
    eligible: &[Case],
    fraud: &FraudScores,
    weights: &Weights,
    target_length: usize,
) -> Result<Route> {
    let ranked = ranking::rank(
        start.position,
        eligible,
        fraud,
        weights,
        DEFAULT_SUGGESTION_LIMIT,
    );
    let shortened = shorten(&ranked, target_length)?;
    Ok(Route::from_cases(shortened))
}

/// The winning route is presented nearest-first, not score-first. The
/// sort is stable, so equal distances keep their ranked order.
fn sort_for_presentation(cases: &mut [ScoredCase]) {
    cases.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
}

fn worker_count() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(2)
}

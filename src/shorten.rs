//! Greedy route shortening with address merging.
//!
//! Takes a ranked candidate list and cuts it down to a day-sized route.
//! Visits at the same street address cost almost nothing once an inspector
//! is at the door, so each consumed same-address adjacency earns one extra
//! slot. The result is always a prefix of the input, possibly longer than
//! the target when such runs are consumed.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::ScoredCase;

/// Cuts `ranked` down to roughly `target_length` entries.
///
/// Walks the list best-first with a slot budget of `target_length`. Each
/// taken case spends one slot; when the next case in line shares the taken
/// case's street address, one slot is refunded so the run can be kept
/// together. Stops when the budget is spent or the list runs out.
pub fn shorten(ranked: &[ScoredCase], target_length: usize) -> Result<Vec<ScoredCase>> {
    if target_length == 0 {
        return Err(Error::invalid_criteria("target length must be at least 1"));
    }

    let mut shortened: Vec<ScoredCase> = Vec::with_capacity(target_length);
    let mut budget = target_length;
    let mut idx = 0;
    while budget > 0 && idx < ranked.len() {
        shortened.push(ranked[idx].clone());
        budget -= 1;
        if let Some(next) = ranked.get(idx + 1) {
            if ranked[idx].case.address.same_address(&next.case.address) {
                budget += 1;
            }
        }
        idx += 1;
    }

    debug!(
        ranked = ranked.len(),
        target = target_length,
        taken = shortened.len(),
        "shortened ranked list"
    );
    Ok(shortened)
}

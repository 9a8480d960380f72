//! Candidate pool hygiene.
//!
//! Generation operates on a caller-supplied pool snapshot. Before any
//! scoring runs, the pool is cleaned up here: explicit exclusions removed,
//! duplicate ids collapsed, and (when requested) candidates restricted to
//! postal-code districts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Case, CaseId};

/// Drops every case whose id appears in `excluded`. Pool order is kept.
pub fn remove_excluded(pool: Vec<Case>, excluded: &HashSet<CaseId>) -> Vec<Case> {
    if excluded.is_empty() {
        return pool;
    }
    let before = pool.len();
    let kept: Vec<Case> = pool
        .into_iter()
        .filter(|case| !excluded.contains(&case.id))
        .collect();
    debug!(
        removed = before - kept.len(),
        remaining = kept.len(),
        "removed excluded cases from pool"
    );
    kept
}

/// Collapses duplicate case ids, keeping the first occurrence.
pub fn dedupe_by_id(pool: Vec<Case>) -> Vec<Case> {
    let mut seen: HashSet<CaseId> = HashSet::with_capacity(pool.len());
    let before = pool.len();
    let kept: Vec<Case> = pool
        .into_iter()
        .filter(|case| seen.insert(case.id.clone()))
        .collect();
    if kept.len() < before {
        debug!(
            removed = before - kept.len(),
            remaining = kept.len(),
            "collapsed duplicate case ids"
        );
    }
    kept
}

/// Inclusive numeric postal-code district range, e.g. 1011..=1019.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeRange {
    pub start: u32,
    pub end: u32,
}

impl PostalCodeRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    fn contains(&self, district: u32) -> bool {
        self.start <= district && district <= self.end
    }
}

/// Restricts the pool to cases whose postal-code district falls inside one
/// of `ranges`. Empty `ranges` is a pass-through. Cases whose postal code
/// has no leading district digits are dropped when ranges are active.
pub fn filter_postal_ranges(pool: Vec<Case>, ranges: &[PostalCodeRange]) -> Result<Vec<Case>> {
    if ranges.is_empty() {
        return Ok(pool);
    }
    for range in ranges {
        if range.start > range.end {
            return Err(Error::invalid_criteria(format!(
                "postal code range start {} exceeds end {}",
                range.start, range.end
            )));
        }
    }
    let before = pool.len();
    let kept: Vec<Case> = pool
        .into_iter()
        .filter(|case| {
            postal_district(&case.address.postal_code)
                .is_some_and(|district| ranges.iter().any(|range| range.contains(district)))
        })
        .collect();
    debug!(
        removed = before - kept.len(),
        remaining = kept.len(),
        "restricted pool to postal code ranges"
    );
    Ok(kept)
}

/// Leading district digits of a postal code ("1015BB" -> 1015).
fn postal_district(postal_code: &str) -> Option<u32> {
    let digits: String = postal_code
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

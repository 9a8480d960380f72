//! Integration seams for the itinerary planner.
//!
//! These are intentionally minimal. Concrete apps plug in their own case
//! registry and fraud-prediction backends; the generation algorithm only
//! ever sees the traits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Case, FraudScores};
use crate::pool::PostalCodeRange;

/// Selection criteria a [`CaseSource`] applies when assembling a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseQuery {
    /// Restrict to a registry theme, if the backend distinguishes them.
    pub theme: Option<u64>,
    /// Only cases that are still open.
    pub open_cases_only: bool,
    /// Earliest scheduled visit date, ISO 8601 date (`2026-08-26`).
    pub visit_from: Option<String>,
    /// Restrict to postal-code districts. Empty means no restriction.
    pub postal_code_ranges: Vec<PostalCodeRange>,
}

/// Supplies the candidate pool for one generation call.
pub trait CaseSource {
    fn fetch_eligible_cases(&self, query: &CaseQuery) -> Result<Vec<Case>>;
}

/// Supplies fraud predictions keyed by case id.
///
/// Backends without predictions for some (or all) cases simply leave those
/// ids out of the lookup.
pub trait FraudScoreProvider {
    fn fraud_probabilities(&self) -> Result<FraudScores>;
}

impl FraudScoreProvider for FraudScores {
    fn fraud_probabilities(&self) -> Result<FraudScores> {
        Ok(self.clone())
    }
}

/// In-memory [`CaseSource`] over a fixed list, for tests and offline runs.
///
/// Applies only the postal-code restriction from the query; the other
/// query fields describe registry-side filters this source cannot answer.
#[derive(Debug, Clone, Default)]
pub struct StaticCases {
    cases: Vec<Case>,
}

impl StaticCases {
    pub fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }
}

impl CaseSource for StaticCases {
    fn fetch_eligible_cases(&self, query: &CaseQuery) -> Result<Vec<Case>> {
        crate::pool::filter_postal_ranges(self.cases.clone(), &query.postal_code_ranges)
    }
}

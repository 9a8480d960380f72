//! Core data model for itinerary generation.
//!
//! Inputs ([`Case`], [`FraudScores`]) are read-only snapshots owned by the
//! caller for the duration of one generation call. The algorithm never
//! mutates them; scoring attaches derived fields by building [`ScoredCase`]
//! values instead.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Opaque case identifier as issued by the external case registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for CaseId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Street-level address of a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_name: String,
    /// Bare house number, shared by every unit in a building. Unit
    /// suffixes ("10-H", "10-2") do not belong here, or co-located units
    /// would stop counting as the same address.
    pub street_number: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street_name: impl Into<String>,
        street_number: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street_name: street_name.into(),
            street_number: street_number.into(),
            postal_code: postal_code.into(),
        }
    }

    /// True when both refer to the same building: exact street name and
    /// house number match. Postal code plays no part.
    pub fn same_address(&self, other: &Address) -> bool {
        self.street_name == other.street_name && self.street_number == other.street_number
    }
}

/// A candidate inspection unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub address: Address,
    pub position: LatLng,
    /// Weight from the registry's schedule/priority classification.
    #[serde(default)]
    pub priority_weight: f64,
    /// Probability the caller resolved onto the snapshot, if any. A lookup
    /// entry in [`FraudScores`] takes precedence during ranking.
    #[serde(default)]
    pub fraud_probability: Option<f64>,
}

impl Case {
    pub fn new(id: CaseId, address: Address, position: LatLng) -> Self {
        Self {
            id,
            address,
            position,
            priority_weight: 0.0,
            fraud_probability: None,
        }
    }
}

/// A case with the scoring fields attached during ranking.
///
/// Never mutated after creation; transient, not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCase {
    pub case: Case,
    /// Great-circle distance to the ranking center, in meters.
    pub distance_m: f64,
    /// 1 = nearest in pool, 0 = farthest (or the whole pool co-located
    /// with the center).
    pub normalized_inverse_distance: f64,
    /// Resolved prediction, 0 when none exists.
    pub fraud_probability: f64,
    pub score: f64,
}

impl ScoredCase {
    pub fn id(&self) -> &CaseId {
        &self.case.id
    }
}

/// Fraud-prediction lookup keyed by case id.
///
/// A missing entry is the normal "no prediction yet" state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FraudScores(HashMap<CaseId, f64>);

impl FraudScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: CaseId, probability: f64) {
        self.0.insert(id, probability);
    }

    pub fn probability_for(&self, id: &CaseId) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CaseId, f64)> for FraudScores {
    fn from_iter<I: IntoIterator<Item = (CaseId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An ordered day route with its aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub cases: Vec<ScoredCase>,
    /// Sum of the member scores.
    pub score: f64,
}

impl Route {
    pub fn empty() -> Self {
        Self {
            cases: Vec::new(),
            score: 0.0,
        }
    }

    /// Builds a route from its members; the aggregate is the member sum.
    pub fn from_cases(cases: Vec<ScoredCase>) -> Self {
        let score = cases.iter().map(|c| c.score).sum();
        Self { cases, score }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CaseId> {
        self.cases.iter().map(|c| c.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &str, score: f64) -> ScoredCase {
        ScoredCase {
            case: Case::new(
                CaseId::from(id),
                Address::new("Herengracht", "12", "1015BB"),
                LatLng::new(52.37, 4.89),
            ),
            distance_m: 0.0,
            normalized_inverse_distance: 0.0,
            fraud_probability: 0.0,
            score,
        }
    }

    #[test]
    fn test_same_address_requires_name_and_number() {
        let a = Address::new("Herengracht", "12", "1015BB");
        let b = Address::new("Herengracht", "12", "1016AA");
        let c = Address::new("Herengracht", "14", "1015BB");
        let d = Address::new("Keizersgracht", "12", "1015BB");

        assert!(a.same_address(&b), "postal code does not matter");
        assert!(!a.same_address(&c));
        assert!(!a.same_address(&d));
    }

    #[test]
    fn test_fraud_scores_missing_entry_is_none() {
        let mut scores = FraudScores::new();
        scores.insert(CaseId::from("1"), 0.8);

        assert_eq!(scores.probability_for(&CaseId::from("1")), Some(0.8));
        assert_eq!(scores.probability_for(&CaseId::from("2")), None);
    }

    #[test]
    fn test_route_score_is_member_sum() {
        let route = Route::from_cases(vec![scored("1", 0.5), scored("2", 1.25)]);
        assert_eq!(route.len(), 2);
        assert!((route.score - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_route() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.score, 0.0);
    }

    #[test]
    fn test_case_id_display_matches_registry_form() {
        assert_eq!(CaseId::from(123_u64).to_string(), "123");
        assert_eq!(CaseId::from("abc").as_str(), "abc");
    }
}

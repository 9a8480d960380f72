//! Candidate scoring.
//!
//! A candidate's score is a weighted linear sum of three signals: proximity
//! to the current ranking center, fraud probability, and case priority.
//! Weights are plain multipliers with no normalization, so callers can skew
//! towards any signal (or zero one out) without touching the algorithm.

use serde::{Deserialize, Serialize};

/// Production default emphasis on proximity.
pub const DEFAULT_DISTANCE_WEIGHT: f64 = 0.25;
/// Production default emphasis on fraud predictions.
pub const DEFAULT_FRAUD_PROBABILITY_WEIGHT: f64 = 1.0;
/// Production default emphasis on case priority.
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.3;

/// Multipliers for the three scoring signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub distance: f64,
    pub fraud_probability: f64,
    pub priority: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_WEIGHT,
            fraud_probability: DEFAULT_FRAUD_PROBABILITY_WEIGHT,
            priority: DEFAULT_PRIORITY_WEIGHT,
        }
    }
}

impl Weights {
    pub fn new(distance: f64, fraud_probability: f64, priority: f64) -> Self {
        Self {
            distance,
            fraud_probability,
            priority,
        }
    }

    /// Scores one candidate. `normalized_inverse_distance` is expected in
    /// `[0, 1]` (1 = nearest in pool); the other signals are taken as-is,
    /// and the result is intentionally unclamped.
    pub fn score(
        &self,
        normalized_inverse_distance: f64,
        fraud_probability: f64,
        priority: f64,
    ) -> f64 {
        self.distance * normalized_inverse_distance
            + self.fraud_probability * fraud_probability
            + self.priority * priority
    }
}

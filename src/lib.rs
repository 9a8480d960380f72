//! Itinerary planner core.
//!
//! Generates daily field-inspection routes from a case pool: candidates
//! are scored on proximity, fraud probability, and priority, and the best
//! route is found by trying candidate starting points in parallel.

pub mod error;
pub mod geo;
pub mod model;
pub mod pool;
pub mod ranking;
pub mod registry;
pub mod scoring;
pub mod search;
pub mod shorten;
pub mod suggest;
pub mod traits;

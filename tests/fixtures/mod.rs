//! Test fixtures for the itinerary planner.
//!
//! Provides realistic test data including:
//! - Real Amsterdam street addresses grouped by area
//! - Builders for cases, case pools, and multi-unit buildings

pub mod amsterdam_cases;

pub use amsterdam_cases::*;

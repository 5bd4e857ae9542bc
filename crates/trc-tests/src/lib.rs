//! # trc-tests
//!
//! Test support for oxtrc.
//!
//! This crate provides:
//! - Deterministic sample-value and curve generators
//! - Error statistics for comparing curve outputs
//! - Closed-form reference transfer functions and moxcms profile access
//!
//! The integration tests under `tests/` cover curve properties, the tag
//! validation boundary, batch/parallel parity and working spaces.

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_values};
pub use patterns::{ValuePattern, generate_values, monotonic_table, random_curve};

//! Sampled (curv) curve evaluation
//!
//! Forward lookup is nearest-sample, not interpolated. The inverse is a
//! lower-bound binary search over the table, so its precision is limited to
//! one table step.
//!
//! The inverse returns the converged lower bound, not the last midpoint the
//! search probed. For `[0.0, 0.5, 1.0]` at 0.75 that is 1.0, where a search
//! reporting its last probe gives 0.5.

use super::{SampledCurve, pow};

impl SampledCurve {
    /// Evaluate the curve at a given input (nominally 0.0 to 1.0)
    ///
    /// # Panics
    ///
    /// For table curves, panics when `value` lies outside the range the
    /// table covers (the rounded index falls off either end) or is NaN.
    /// Inputs are not clamped.
    #[inline]
    pub fn eval(&self, value: f32) -> f32 {
        match self {
            SampledCurve::Identity => value,
            SampledCurve::Gamma(g) => pow(value, *g),
            SampledCurve::Table(table) => table[table_index(table.len(), value)],
        }
    }

    /// Evaluate the inverse curve
    ///
    /// Table curves return the position of the first sample that is at
    /// least `value`, as a fraction of the table length. Values above the
    /// last sample map to 1.0.
    #[inline]
    pub fn eval_inverse(&self, value: f32) -> f32 {
        match self {
            SampledCurve::Identity => value,
            SampledCurve::Gamma(g) => pow(value, 1.0 / *g),
            SampledCurve::Table(table) => {
                let last = table.len() - 1;
                let found = table.partition_point(|&sample| value > sample).min(last);
                found as f32 / last as f32
            }
        }
    }
}

/// Nearest-sample index for `value` in a table of `len` entries
///
/// The scaled position is formed in f32 and the half-step is added in f64,
/// so positions just below a half-step round down.
///
/// Returns `usize::MAX` for negative or NaN positions so that the caller's
/// indexing fails instead of silently saturating to entry 0.
#[inline]
fn table_index(len: usize, value: f32) -> usize {
    let pos = ((value * (len - 1) as f32) as f64 + 0.5).floor();
    if pos >= 0.0 { pos as usize } else { usize::MAX }
}

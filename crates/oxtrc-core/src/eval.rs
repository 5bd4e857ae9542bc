//! Curve evaluation entry points
//!
//! `inverted = false` runs a curve in its stored direction (device encoded
//! → linear), `inverted = true` runs its inverse.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::tag::TrcTag;

/// Evaluate one curve at one sample value
#[inline]
pub fn evaluate(curve: &Curve, inverted: bool, value: f32) -> f32 {
    if inverted {
        curve.eval_inverse(value)
    } else {
        curve.eval(value)
    }
}

/// Evaluate one curve per channel, index for index
///
/// Fails when the number of curves and values differ.
pub fn evaluate_channels(curves: &[Curve], inverted: bool, values: &[f32]) -> Result<Vec<f32>> {
    if curves.len() != values.len() {
        return Err(Error::ChannelCount {
            curves: curves.len(),
            values: values.len(),
        });
    }

    Ok(curves
        .iter()
        .zip(values)
        .map(|(curve, &value)| evaluate(curve, inverted, value))
        .collect())
}

/// Validate an untrusted tag and evaluate it
pub fn evaluate_tag(tag: &TrcTag, inverted: bool, value: f32) -> Result<f32> {
    let curve = Curve::try_from(tag)?;
    Ok(evaluate(&curve, inverted, value))
}

/// Build a lookup table for a curve
///
/// Returns `size` entries sampling the curve at evenly spaced inputs over
/// [0.0, 1.0]. `size` must be at least 2.
pub fn build_lut(curve: &Curve, inverted: bool, size: usize) -> Vec<f32> {
    let last = (size - 1) as f32;
    (0..size)
        .map(|i| evaluate(curve, inverted, i as f32 / last))
        .collect()
}

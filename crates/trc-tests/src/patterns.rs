//! Test value generation
//!
//! Sample values and curves for property tests. Everything random is
//! seeded, so failures reproduce.

use oxtrc_core::{Curve, ParametricCurve, SampledCurve};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample value patterns
#[derive(Debug, Clone, Copy)]
pub enum ValuePattern {
    /// Evenly spaced 0.0 to 1.0 inclusive
    Ramp,
    /// Uniform random in [0, 1) with seed
    Random(u64),
    /// Values clustered near 0, where curves have their linear segments
    Shadows,
    /// 0.0 and 1.0 repeated
    Extremes,
}

/// Generate `count` sample values
pub fn generate_values(pattern: ValuePattern, count: usize) -> Vec<f32> {
    match pattern {
        ValuePattern::Ramp => {
            let last = count.saturating_sub(1).max(1) as f32;
            (0..count).map(|i| i as f32 / last).collect()
        }
        ValuePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count).map(|_| rng.gen_range(0.0..1.0)).collect()
        }
        ValuePattern::Shadows => {
            let last = count.saturating_sub(1).max(1) as f32;
            (0..count).map(|i| 0.1 * i as f32 / last).collect()
        }
        ValuePattern::Extremes => (0..count).map(|i| (i % 2) as f32).collect(),
    }
}

/// Random monotonically non-decreasing table from 0.0 to 1.0
///
/// Includes flat runs, as real profiles often have.
pub fn monotonic_table(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let steps: Vec<f32> = (1..len)
        .map(|_| {
            if rng.gen_bool(0.2) {
                0.0
            } else {
                rng.gen_range(0.1..1.0)
            }
        })
        .collect();
    let total: f32 = steps.iter().sum::<f32>().max(f32::MIN_POSITIVE);

    let mut table = Vec::with_capacity(len);
    let mut acc = 0.0f32;
    table.push(0.0);
    for step in steps {
        acc += step;
        table.push((acc / total).min(1.0));
    }
    table
}

/// Random curve of any kind with parameters that keep [0, 1] finite
pub fn random_curve(rng: &mut ChaCha8Rng) -> Curve {
    match rng.gen_range(0..5) {
        0 => Curve::identity(),
        1 => Curve::gamma(rng.gen_range(0.5..3.0)),
        2 => Curve::Sampled(SampledCurve::Table(monotonic_table(
            rng.r#gen(),
            rng.gen_range(2..512),
        ))),
        3 => Curve::Parametric(ParametricCurve::gamma(rng.gen_range(0.5..3.0))),
        _ => {
            let mut curve = ParametricCurve::srgb();
            curve.g = rng.gen_range(1.8..2.6);
            Curve::Parametric(curve)
        }
    }
}

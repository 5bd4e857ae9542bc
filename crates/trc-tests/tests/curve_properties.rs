//! Curve Evaluation Properties
//!
//! Identity, gamma round trips, table inverse consistency, exact parametric
//! formulas and branch thresholds, plus the JSON fixture cases.

use oxtrc_core::{
    Curve, ParametricCurve, ParametricCurveType, SampledCurve, TrcTag, evaluate, evaluate_tag,
};
use trc_tests::{ValuePattern, compare_values, generate_values, monotonic_table, reference};

#[test]
fn identity_curve_passes_values_through() {
    let curve = Curve::identity();
    for v in generate_values(ValuePattern::Ramp, 1001) {
        assert_eq!(evaluate(&curve, false, v), v);
        assert_eq!(evaluate(&curve, true, v), v);
    }
}

#[test]
fn gamma_only_round_trip() {
    let values: Vec<f32> = generate_values(ValuePattern::Random(7), 2000)
        .into_iter()
        .filter(|&v| v > 0.0)
        .collect();

    for gamma in [0.45f32, 1.0, 1.8, 2.2, 2.6] {
        let curve = Curve::gamma(gamma);
        let back: Vec<f32> = values
            .iter()
            .map(|&v| evaluate(&curve, true, evaluate(&curve, false, v)))
            .collect();
        let stats = compare_values(&back, &values);
        assert!(stats.within(1e-5), "gamma {}: {:?}", gamma, stats);
    }
}

#[test]
fn table_inverse_lands_within_one_step() {
    for seed in 0..16 {
        let len = 16 + (seed as usize) * 61;
        let table = monotonic_table(seed, len);
        let step = 1.0 / (len - 1) as f32;
        let curve = Curve::Sampled(SampledCurve::Table(table.clone()));

        for v in generate_values(ValuePattern::Random(seed + 100), 500) {
            let x = evaluate(&curve, true, v);
            assert!((0.0..=1.0).contains(&x));
            let index = (x / step).round() as usize;
            // Lower bound: the chosen sample reaches v, its predecessor does not
            assert!(table[index] >= v || index == len - 1, "seed {} v {}", seed, v);
            if index > 0 {
                assert!(table[index - 1] < v, "seed {} v {}", seed, v);
            }
            // Forward lookup of that position returns the chosen sample
            assert_eq!(evaluate(&curve, false, x), table[index]);
        }
    }
}

#[test]
fn table_forward_is_nearest_sample() {
    let table = monotonic_table(3, 33);
    let curve = Curve::Sampled(SampledCurve::Table(table.clone()));
    for v in generate_values(ValuePattern::Ramp, 257) {
        let nearest = ((v * 32.0) as f64 + 0.5).floor() as usize;
        assert_eq!(evaluate(&curve, false, v), table[nearest]);
    }
}

#[test]
fn table_half_step_rounds_in_double() {
    let curve = Curve::Sampled(SampledCurve::Table(vec![0.0, 1.0]));
    let below_half = f32::from_bits(0.5f32.to_bits() - 1);
    // below_half + 0.5 rounds to 1.0 in f32 but not in f64
    assert_eq!(below_half + 0.5, 1.0);
    assert_eq!(evaluate(&curve, false, below_half), 0.0);

    let table = monotonic_table(9, 5);
    let curve = Curve::Sampled(SampledCurve::Table(table.clone()));
    for i in 0..4 {
        // Just under each half step stays on the lower sample
        let half = (i as f32 + 0.5) / 4.0;
        let below = f32::from_bits(half.to_bits() - 1);
        let nearest = ((below * 4.0) as f64 + 0.5).floor() as usize;
        assert_eq!(evaluate(&curve, false, below), table[nearest]);
    }
}

#[test]
fn type1_exact_formula() {
    let curve = Curve::Parametric(ParametricCurve::gamma(2.2));
    let forward = evaluate(&curve, false, 0.5);
    assert!((forward as f64 - 0.5f64.powf(2.2)).abs() < 1e-6);

    let inverse = evaluate(&curve, true, 0.5);
    assert!((inverse as f64 - 0.5f64.powf(1.0 / 2.2)).abs() < 1e-6);
}

#[test]
fn srgb_threshold_is_inclusive_at_d() {
    let p = ParametricCurve::srgb();
    let curve = Curve::Parametric(p);
    let eps = 1e-5f32;

    let below = p.d - eps;
    assert_eq!(evaluate(&curve, false, below), p.c * below);

    let above = p.d + eps;
    let power = ((p.a * above + p.b) as f64).powf(p.g as f64) as f32;
    assert_eq!(evaluate(&curve, false, above), power);

    let at = ((p.a * p.d + p.b) as f64).powf(p.g as f64) as f32;
    assert_eq!(evaluate(&curve, false, p.d), at);
}

#[test]
fn srgb_forward_matches_reference() {
    let curve = Curve::srgb();
    let values = generate_values(ValuePattern::Ramp, 4096);
    let actual: Vec<f32> = values.iter().map(|&v| evaluate(&curve, false, v)).collect();
    let expected: Vec<f32> = values
        .iter()
        .map(|&v| reference::srgb_decode(v as f64) as f32)
        .collect();
    let stats = compare_values(&actual, &expected);
    assert!(stats.within(1e-6), "{:?}", stats);
}

#[test]
fn gamma_forward_matches_reference() {
    let curve = Curve::gamma(1.8);
    let values = generate_values(ValuePattern::Random(11), 1000);
    let actual: Vec<f32> = values.iter().map(|&v| evaluate(&curve, false, v)).collect();
    let expected: Vec<f32> = values
        .iter()
        .map(|&v| reference::gamma_decode(v as f64, 1.8f32 as f64) as f32)
        .collect();
    assert!(compare_values(&actual, &expected).within(0.0));
}

/// The Cie122_1996 and SRgb inverses divide a value-independent constant by
/// the input instead of inverting the power segment. These outputs are
/// relied upon as-is.
#[test]
fn power_segment_inverse_is_not_algebraic_inverse() {
    let p = ParametricCurve::srgb();
    let curve = Curve::Parametric(p);

    let constant = ((p.a as f64).powf((1.0 / p.g) as f64) as f32) - p.b;
    for y in [0.05f32, 0.2, 0.5, 1.0] {
        assert_eq!(evaluate(&curve, true, y), constant / y);
    }

    // Linear segment inverts exactly
    let x = 0.01f32;
    let back = evaluate(&curve, true, evaluate(&curve, false, x));
    assert!((back - x).abs() < 1e-6);

    // Power segment does not
    let x = 0.5f32;
    let back = evaluate(&curve, true, evaluate(&curve, false, x));
    assert!((back - x).abs() > 0.1, "got {}", back);

    let cie = Curve::Parametric(ParametricCurve {
        curve_type: ParametricCurveType::Cie122_1996,
        g: 2.0,
        a: 4.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 0.0,
        f: 0.0,
    });
    // (4^(1/2) - 0) / y
    assert!((evaluate(&cie, true, 0.25) - 8.0).abs() < 1e-5);
}

#[test]
fn out_of_range_table_lookup_panics() {
    let curve = Curve::Sampled(SampledCurve::Table(vec![0.0, 1.0]));
    let result = std::panic::catch_unwind(|| evaluate(&curve, false, 2.0));
    assert!(result.is_err());
}

#[derive(Debug, serde::Deserialize)]
struct Fixture {
    name: String,
    tag: TrcTag,
    inverted: bool,
    input: f32,
    expected: Option<f32>,
    error: Option<String>,
}

#[test]
fn fixture_cases() -> anyhow::Result<()> {
    let fixtures: Vec<Fixture> = serde_json::from_str(include_str!("../fixtures/curves.json"))?;
    assert!(!fixtures.is_empty());

    for fixture in &fixtures {
        let result = evaluate_tag(&fixture.tag, fixture.inverted, fixture.input);
        match (&fixture.expected, &fixture.error, result) {
            (Some(expected), None, Ok(actual)) => {
                assert!(
                    (actual - expected).abs() < 1e-5,
                    "{}: expected {}, got {}",
                    fixture.name,
                    expected,
                    actual
                );
            }
            (None, Some(kind), Err(err)) => {
                let debug = format!("{:?}", err);
                assert!(
                    debug.starts_with(kind.as_str()),
                    "{}: expected {}, got {}",
                    fixture.name,
                    kind,
                    debug
                );
            }
            (_, _, other) => anyhow::bail!("{}: unexpected outcome {:?}", fixture.name, other),
        }
    }

    Ok(())
}

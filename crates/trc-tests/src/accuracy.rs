//! Error statistics for curve comparisons

/// Statistics from comparing two sequences of curve outputs
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute error
    pub mean: f64,
    /// Maximum absolute error
    pub max: f64,
    /// 95th percentile absolute error
    pub p95: f64,
    /// Index of the largest error
    pub worst_index: usize,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Check if every sample is within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Compare two equally long sequences of values
///
/// NaN on either side counts as an infinite error unless both are NaN.
pub fn compare_values(actual: &[f32], expected: &[f32]) -> ErrorStats {
    assert_eq!(actual.len(), expected.len(), "length mismatch");

    let mut errors: Vec<f64> = actual
        .iter()
        .zip(expected)
        .map(|(&a, &e)| match (a.is_nan(), e.is_nan()) {
            (true, true) => 0.0,
            (false, false) => (a as f64 - e as f64).abs(),
            _ => f64::INFINITY,
        })
        .collect();

    let count = errors.len();
    let (worst_index, max) = errors
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0f64), |best, (i, e)| if e > best.1 { (i, e) } else { best });
    let mean = if count > 0 {
        errors.iter().sum::<f64>() / count as f64
    } else {
        0.0
    };

    errors.sort_by(|a, b| a.total_cmp(b));
    let p95 = if count > 0 {
        errors[((count - 1) as f64 * 0.95) as usize]
    } else {
        0.0
    };

    ErrorStats {
        mean,
        max,
        p95,
        worst_index,
        count,
    }
}

//! Parametric (para) curve evaluation
//!
//! Forward and inverse formulas for the five ICC function types. Inputs are
//! not clamped and divisions are not guarded; zero or negative parameters
//! produce whatever IEEE 754 gives (inf/NaN).
//!
//! The inverses of `Cie122_1996` and `SRgb` compute `(a^(1/g) - b) / x` on
//! the power segment, which is not the algebraic inverse of the forward
//! formula. Profile pipelines depend on these exact outputs.

use super::{ParametricCurve, ParametricCurveType, pow};

impl ParametricCurve {
    /// Evaluate the curve (encoded → linear)
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        match self.curve_type {
            ParametricCurveType::Type1 => pow(x, self.g),
            ParametricCurveType::Cie122_1996 => {
                if x >= -self.b / self.a {
                    pow(self.a * x + self.b, self.g)
                } else {
                    0.0
                }
            }
            ParametricCurveType::Iec61966_3 => {
                if x >= -self.b / self.a {
                    pow(self.a * x + self.b, self.g) + self.c
                } else {
                    self.c
                }
            }
            ParametricCurveType::SRgb => {
                if x >= self.d {
                    pow(self.a * x + self.b, self.g)
                } else {
                    self.c * x
                }
            }
            ParametricCurveType::Type5 => {
                if x >= self.d {
                    pow(self.a * x + self.b, self.g) + self.c
                } else {
                    self.c * x + self.f
                }
            }
        }
    }

    /// Evaluate the inverse curve (linear → encoded)
    ///
    /// Branch selection uses the same thresholds as [`ParametricCurve::eval`],
    /// applied to the input value.
    #[inline]
    pub fn eval_inverse(&self, y: f32) -> f32 {
        match self.curve_type {
            ParametricCurveType::Type1 => pow(y, 1.0 / self.g),
            ParametricCurveType::Cie122_1996 => {
                if y >= -self.b / self.a {
                    (pow(self.a, 1.0 / self.g) - self.b) / y
                } else {
                    0.0
                }
            }
            ParametricCurveType::Iec61966_3 => {
                if y >= -self.b / self.a {
                    (pow(y - self.c, 1.0 / self.g) - self.b) / self.a
                } else {
                    self.c
                }
            }
            ParametricCurveType::SRgb => {
                if y >= self.d {
                    (pow(self.a, 1.0 / self.g) - self.b) / y
                } else {
                    y / self.c
                }
            }
            ParametricCurveType::Type5 => {
                if y >= self.d {
                    (pow(y - self.c, 1.0 / self.g) - self.b) / self.a
                } else {
                    (y - self.f) / self.c
                }
            }
        }
    }
}

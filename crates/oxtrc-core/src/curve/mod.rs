//! Tone Response Curve Types
//!
//! ICC profiles describe a channel's tone response in one of two ways:
//! - curv: identity, a single gamma exponent, or a sampled lookup table
//! - para: one of five parametric formulas
//!
//! See ICC.1:2022 Sections 10.6 (curv) and 10.18 (para)

pub mod parametric;
pub mod sampled;

use crate::error::{Error, Result};

/// `base^exp` computed in double precision and narrowed back
///
/// Matches how profile pipelines evaluate ICC curves. Negative bases with
/// non-integer exponents give NaN.
#[inline]
pub(crate) fn pow(base: f32, exp: f32) -> f32 {
    (base as f64).powf(exp as f64) as f32
}

/// A decoded tone response curve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// Lookup curve (curv type)
    Sampled(SampledCurve),
    /// Parametric curve (para type)
    Parametric(ParametricCurve),
}

impl Curve {
    /// Identity curve
    pub fn identity() -> Self {
        Curve::Sampled(SampledCurve::Identity)
    }

    /// Gamma-only curve, `y = x^gamma`
    pub fn gamma(gamma: f32) -> Self {
        Curve::Sampled(SampledCurve::Gamma(gamma))
    }

    /// sRGB transfer function as a parametric curve
    pub fn srgb() -> Self {
        Curve::Parametric(ParametricCurve::srgb())
    }

    /// Evaluate the curve, encoded to linear
    #[inline]
    pub fn eval(&self, value: f32) -> f32 {
        match self {
            Curve::Sampled(curve) => curve.eval(value),
            Curve::Parametric(curve) => curve.eval(value),
        }
    }

    /// Evaluate the inverse curve, linear to encoded
    #[inline]
    pub fn eval_inverse(&self, value: f32) -> f32 {
        match self {
            Curve::Sampled(curve) => curve.eval_inverse(value),
            Curve::Parametric(curve) => curve.eval_inverse(value),
        }
    }
}

impl From<SampledCurve> for Curve {
    fn from(curve: SampledCurve) -> Self {
        Curve::Sampled(curve)
    }
}

impl From<ParametricCurve> for Curve {
    fn from(curve: ParametricCurve) -> Self {
        Curve::Parametric(curve)
    }
}

/// Sampled curve data (curv type)
///
/// The variant is picked from the ICC entry count, see [`SampledCurve::from_entries`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampledCurve {
    /// Identity response (count = 0)
    Identity,
    /// Gamma exponent (count = 1)
    Gamma(f32),
    /// Monotonically non-decreasing table, at least two entries,
    /// normalized to [0, 1]
    Table(Vec<f32>),
}

impl SampledCurve {
    /// Build from normalized curv entries
    ///
    /// Zero entries is the identity, a single entry is a gamma exponent,
    /// anything longer is a lookup table.
    pub fn from_entries(entries: Vec<f32>) -> Self {
        match entries.len() {
            0 => SampledCurve::Identity,
            1 => SampledCurve::Gamma(entries[0]),
            _ => SampledCurve::Table(entries),
        }
    }

    /// Build from a raw 16-bit curv body
    ///
    /// A single entry is u8Fixed8 (gamma = raw / 256); table entries are
    /// scaled by 1/65535.
    pub fn from_u16_table(raw: &[u16]) -> Self {
        match raw {
            [] => SampledCurve::Identity,
            [gamma] => SampledCurve::Gamma(*gamma as f32 / 256.0),
            table => SampledCurve::Table(table.iter().map(|&v| v as f32 / 65535.0).collect()),
        }
    }

    /// Check if this is the identity response
    pub fn is_identity(&self) -> bool {
        matches!(self, SampledCurve::Identity)
    }

    /// Check if this is a gamma-only curve
    pub fn is_gamma_only(&self) -> bool {
        matches!(self, SampledCurve::Gamma(_))
    }

    /// Gamma exponent, for gamma-only curves
    pub fn gamma(&self) -> Option<f32> {
        match self {
            SampledCurve::Gamma(g) => Some(*g),
            _ => None,
        }
    }

    /// Table entries, for table curves
    pub fn samples(&self) -> Option<&[f32]> {
        match self {
            SampledCurve::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// ICC Parametric Curve Type
///
/// As defined in ICC.1:2022 Section 10.18. The discriminant is the ICC
/// function type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum ParametricCurveType {
    /// Y = X^g
    Type1 = 0,
    /// Y = (aX + b)^g  if X >= -b/a, else 0
    Cie122_1996 = 1,
    /// Y = (aX + b)^g + c  if X >= -b/a, else c
    Iec61966_3 = 2,
    /// Y = (aX + b)^g  if X >= d, else cX
    SRgb = 3,
    /// Y = (aX + b)^g + c  if X >= d, else cX + f
    Type5 = 4,
}

impl ParametricCurveType {
    /// Get the curve type from its ICC function type code
    pub fn from_icc(function_type: u16) -> Result<Self> {
        match function_type {
            0 => Ok(Self::Type1),
            1 => Ok(Self::Cie122_1996),
            2 => Ok(Self::Iec61966_3),
            3 => Ok(Self::SRgb),
            4 => Ok(Self::Type5),
            other => Err(Error::UnsupportedParametricType(other)),
        }
    }

    /// ICC function type code
    pub fn to_icc(self) -> u16 {
        self as u16
    }

    /// Get the number of parameters stored in the tag
    pub fn param_count(self) -> usize {
        match self {
            Self::Type1 => 1,
            Self::Cie122_1996 => 3,
            Self::Iec61966_3 => 4,
            Self::SRgb => 5,
            Self::Type5 => 7,
        }
    }
}

/// ICC Parametric Curve (para type)
///
/// Parameters unused by `curve_type` are left at their defaults. `e` is
/// kept for completeness of the ICC parameter list; no formula reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricCurve {
    /// Curve type
    pub curve_type: ParametricCurveType,
    /// Gamma value (g)
    pub g: f32,
    /// Parameter a
    pub a: f32,
    /// Parameter b
    pub b: f32,
    /// Parameter c
    pub c: f32,
    /// Parameter d
    pub d: f32,
    /// Parameter e
    pub e: f32,
    /// Parameter f
    pub f: f32,
}

impl ParametricCurve {
    /// Create a simple gamma curve (Type1)
    pub fn gamma(g: f32) -> Self {
        Self {
            curve_type: ParametricCurveType::Type1,
            g,
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create an sRGB transfer function curve
    ///
    /// - Y = X/12.92                 if X < 0.04045
    /// - Y = ((X+0.055)/1.055)^2.4   if X >= 0.04045
    pub fn srgb() -> Self {
        Self {
            curve_type: ParametricCurveType::SRgb,
            g: 2.4,
            a: 1.0 / 1.055,
            b: 0.055 / 1.055,
            c: 1.0 / 12.92,
            d: 0.04045,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a BT.709 transfer function curve
    pub fn bt709() -> Self {
        Self {
            curve_type: ParametricCurveType::SRgb,
            g: 1.0 / 0.45,
            a: 1.0 / 1.099,
            b: 0.099 / 1.099,
            c: 1.0 / 4.5,
            d: 0.081,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create from an ICC function type code and its parameter list
    ///
    /// Parameters are in tag order: g, a, b, c, d, e, f. Extra trailing
    /// parameters are ignored.
    pub fn from_params(function_type: u16, params: &[f32]) -> Result<Self> {
        let curve_type = ParametricCurveType::from_icc(function_type)?;
        let expected = curve_type.param_count();
        if params.len() < expected {
            return Err(Error::ParameterCount {
                function_type,
                expected,
                actual: params.len(),
            });
        }

        let mut curve = Self::gamma(params[0]);
        curve.curve_type = curve_type;
        if expected >= 3 {
            curve.a = params[1];
            curve.b = params[2];
        }
        if expected >= 4 {
            curve.c = params[3];
        }
        if expected >= 5 {
            curve.d = params[4];
        }
        if expected >= 7 {
            curve.e = params[5];
            curve.f = params[6];
        }

        Ok(curve)
    }

    /// Parameters in ICC tag order, truncated to what the type stores
    pub fn params(&self) -> Vec<f32> {
        let all = [self.g, self.a, self.b, self.c, self.d, self.e, self.f];
        all[..self.curve_type.param_count()].to_vec()
    }
}

//! TRC Tag Validation
//!
//! A tone response tag slot in a profile may hold any tag type. Only `curv`
//! and `para` describe a curve; everything else marks the profile as
//! corrupt. Validation happens once, when the tag is turned into a
//! [`Curve`], so evaluation itself never fails.

use crate::curve::{Curve, ParametricCurve, SampledCurve};
use crate::error::{Error, Result};

/// Type signature 'curv'
pub const CURVE_TYPE: u32 = u32::from_be_bytes(*b"curv");

/// Type signature 'para'
pub const PARAMETRIC_CURVE_TYPE: u32 = u32::from_be_bytes(*b"para");

/// Tone response tag contents, as handed over by a profile loader
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrcTag {
    /// curv body, entries normalized to [0, 1] (gamma entry left as-is)
    Curve(Vec<f32>),
    /// para body
    Parametric {
        /// ICC function type code
        function_type: u16,
        /// Parameters in tag order (g, a, b, c, d, e, f)
        params: Vec<f32>,
    },
    /// Any other tag type
    Other {
        /// Tag type signature
        type_signature: u32,
    },
}

impl TrcTag {
    /// Tag type signature
    pub fn type_signature(&self) -> u32 {
        match self {
            TrcTag::Curve(_) => CURVE_TYPE,
            TrcTag::Parametric { .. } => PARAMETRIC_CURVE_TYPE,
            TrcTag::Other { type_signature } => *type_signature,
        }
    }

    /// Validate into a curve
    pub fn to_curve(&self) -> Result<Curve> {
        Curve::try_from(self)
    }
}

impl TryFrom<&TrcTag> for Curve {
    type Error = Error;

    fn try_from(tag: &TrcTag) -> Result<Self> {
        match tag {
            TrcTag::Curve(entries) => Ok(Curve::Sampled(SampledCurve::from_entries(
                entries.clone(),
            ))),
            TrcTag::Parametric {
                function_type,
                params,
            } => ParametricCurve::from_params(*function_type, params)
                .map(Curve::Parametric)
                .inspect_err(|err| {
                    tracing::debug!(
                        function_type,
                        param_count = params.len(),
                        %err,
                        "rejecting parametric TRC tag"
                    );
                }),
            TrcTag::Other { type_signature } => {
                tracing::debug!(
                    type_signature = *type_signature,
                    "rejecting TRC tag that is not a curve"
                );
                Err(Error::UnsupportedCurveKind(*type_signature))
            }
        }
    }
}

impl TryFrom<TrcTag> for Curve {
    type Error = Error;

    fn try_from(tag: TrcTag) -> Result<Self> {
        match tag {
            TrcTag::Curve(entries) => Ok(Curve::Sampled(SampledCurve::from_entries(entries))),
            other => Curve::try_from(&other),
        }
    }
}

impl From<&Curve> for TrcTag {
    fn from(curve: &Curve) -> Self {
        match curve {
            Curve::Sampled(SampledCurve::Identity) => TrcTag::Curve(Vec::new()),
            Curve::Sampled(SampledCurve::Gamma(g)) => TrcTag::Curve(vec![*g]),
            Curve::Sampled(SampledCurve::Table(table)) => TrcTag::Curve(table.clone()),
            Curve::Parametric(p) => TrcTag::Parametric {
                function_type: p.curve_type.to_icc(),
                params: p.params(),
            },
        }
    }
}

/// Function type for a parametric parameter list of the given length
///
/// Unknown lengths give `u16::MAX`, which validation rejects.
#[cfg(feature = "moxcms")]
fn function_type_for_len(len: usize) -> u16 {
    match len {
        1 => 0,
        3 => 1,
        4 => 2,
        5 => 3,
        7 => 4,
        _ => u16::MAX,
    }
}

#[cfg(feature = "moxcms")]
impl From<&moxcms::ToneReprCurve> for TrcTag {
    fn from(trc: &moxcms::ToneReprCurve) -> Self {
        match trc {
            moxcms::ToneReprCurve::Lut(lut) => match lut.as_slice() {
                // u8Fixed8 gamma
                [gamma] => TrcTag::Curve(vec![*gamma as f32 / 256.0]),
                table => TrcTag::Curve(table.iter().map(|&v| v as f32 / 65535.0).collect()),
            },
            moxcms::ToneReprCurve::Parametric(params) => TrcTag::Parametric {
                function_type: function_type_for_len(params.len()),
                params: params.clone(),
            },
        }
    }
}

#[cfg(feature = "moxcms")]
impl TryFrom<&moxcms::ToneReprCurve> for Curve {
    type Error = Error;

    fn try_from(trc: &moxcms::ToneReprCurve) -> Result<Self> {
        Curve::try_from(TrcTag::from(trc))
    }
}

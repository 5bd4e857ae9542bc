//! Companding functions
//!
//! A companding function pair converts a channel between its encoded form
//! and linear light. `expand` decodes, `compress` encodes.

use std::hash::{Hash, Hasher};

use crate::curve::{ParametricCurve, ParametricCurveType, pow};

/// CIE κ, 24389/27
const KAPPA: f32 = 24389.0 / 27.0;

/// CIE ε, 216/24389
const EPSILON: f32 = 216.0 / 24389.0;

const REC2020_ALPHA: f32 = 1.099_296_8;
const REC2020_BETA: f32 = 0.018_053_97;

/// Encoded ↔ linear function pair
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Companding {
    /// IEC 61966-2-1 sRGB
    SRgb,
    /// ITU-R BT.709
    Rec709,
    /// ITU-R BT.2020
    Rec2020,
    /// Pure power law, `linear = encoded^gamma`
    Gamma(f32),
    /// CIE L* (used by ECI RGB v2)
    LStar,
}

impl Companding {
    /// Encoded → linear
    pub fn expand(&self, channel: f32) -> f32 {
        match *self {
            Companding::SRgb => {
                if channel <= 0.04045 {
                    channel / 12.92
                } else {
                    pow((channel + 0.055) / 1.055, 2.4)
                }
            }
            Companding::Rec709 => {
                if channel < 0.081 {
                    channel / 4.5
                } else {
                    pow((channel + 0.099) / 1.099, 1.0 / 0.45)
                }
            }
            Companding::Rec2020 => {
                if channel < REC2020_BETA * 4.5 {
                    channel / 4.5
                } else {
                    pow((channel + REC2020_ALPHA - 1.0) / REC2020_ALPHA, 1.0 / 0.45)
                }
            }
            Companding::Gamma(gamma) => pow(channel, gamma),
            Companding::LStar => {
                if channel <= 0.08 {
                    100.0 * channel / KAPPA
                } else {
                    pow((channel + 0.16) / 1.16, 3.0)
                }
            }
        }
    }

    /// Linear → encoded
    pub fn compress(&self, channel: f32) -> f32 {
        match *self {
            Companding::SRgb => {
                if channel <= 0.003_130_8 {
                    12.92 * channel
                } else {
                    1.055 * pow(channel, 1.0 / 2.4) - 0.055
                }
            }
            Companding::Rec709 => {
                if channel < 0.018 {
                    4.5 * channel
                } else {
                    1.099 * pow(channel, 0.45) - 0.099
                }
            }
            Companding::Rec2020 => {
                if channel < REC2020_BETA {
                    4.5 * channel
                } else {
                    REC2020_ALPHA * pow(channel, 0.45) - (REC2020_ALPHA - 1.0)
                }
            }
            Companding::Gamma(gamma) => pow(channel, 1.0 / gamma),
            Companding::LStar => {
                if channel <= EPSILON {
                    channel * KAPPA / 100.0
                } else {
                    1.16 * channel.cbrt() - 0.16
                }
            }
        }
    }

    /// Equivalent ICC parametric curve for the expand direction
    ///
    /// Every pair here has the shape of an ICC parametric type, so a
    /// working space can be written out as a `para` TRC.
    pub fn to_parametric(&self) -> ParametricCurve {
        match *self {
            Companding::SRgb => ParametricCurve::srgb(),
            Companding::Rec709 => ParametricCurve::bt709(),
            Companding::Rec2020 => ParametricCurve {
                curve_type: ParametricCurveType::SRgb,
                g: 1.0 / 0.45,
                a: 1.0 / REC2020_ALPHA,
                b: (REC2020_ALPHA - 1.0) / REC2020_ALPHA,
                c: 1.0 / 4.5,
                d: REC2020_BETA * 4.5,
                e: 0.0,
                f: 0.0,
            },
            Companding::Gamma(gamma) => ParametricCurve::gamma(gamma),
            Companding::LStar => ParametricCurve {
                curve_type: ParametricCurveType::SRgb,
                g: 3.0,
                a: 1.0 / 1.16,
                b: 0.16 / 1.16,
                c: 100.0 / KAPPA,
                d: 0.08,
                e: 0.0,
                f: 0.0,
            },
        }
    }

    fn key(&self) -> (u8, u32) {
        match *self {
            Companding::SRgb => (0, 0),
            Companding::Rec709 => (1, 0),
            Companding::Rec2020 => (2, 0),
            Companding::Gamma(gamma) => (3, super::float_key(gamma)),
            Companding::LStar => (4, 0),
        }
    }
}

impl PartialEq for Companding {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Companding {}

impl Hash for Companding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

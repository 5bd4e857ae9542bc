//! RGB Working Spaces

use std::hash::{Hash, Hasher};

use super::white_point::{D50, D65};
use super::{Chromaticity, Companding, RgbPrimariesChromaticity, Xyz};

/// An RGB working space: reference white, companding and primaries
///
/// Immutable value type. Equality is structural over all three fields, and
/// hashing agrees with it.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbWorkingSpace {
    white_point: Xyz,
    companding: Companding,
    chromaticity: RgbPrimariesChromaticity,
}

const fn xy(x: f32, y: f32) -> Chromaticity {
    Chromaticity::new(x, y)
}

const SRGB_PRIMARIES: RgbPrimariesChromaticity =
    RgbPrimariesChromaticity::new(xy(0.64, 0.33), xy(0.30, 0.60), xy(0.15, 0.06));

impl RgbWorkingSpace {
    /// sRGB
    pub const SRGB: Self = Self::new(D65, Companding::SRgb, SRGB_PRIMARIES);

    /// Adobe RGB (1998)
    pub const ADOBE_RGB_1998: Self = Self::new(
        D65,
        Companding::Gamma(2.2),
        RgbPrimariesChromaticity::new(xy(0.64, 0.33), xy(0.21, 0.71), xy(0.15, 0.06)),
    );

    /// ITU-R BT.709
    pub const REC709: Self = Self::new(D65, Companding::Rec709, SRGB_PRIMARIES);

    /// ITU-R BT.2020
    pub const REC2020: Self = Self::new(
        D65,
        Companding::Rec2020,
        RgbPrimariesChromaticity::new(xy(0.708, 0.292), xy(0.170, 0.797), xy(0.131, 0.046)),
    );

    /// ProPhoto RGB (ROMM)
    pub const PROPHOTO: Self = Self::new(
        D50,
        Companding::Gamma(1.8),
        RgbPrimariesChromaticity::new(
            xy(0.7347, 0.2653),
            xy(0.1596, 0.8404),
            xy(0.0366, 0.0001),
        ),
    );

    /// ECI RGB v2
    pub const ECI_RGB_V2: Self = Self::new(
        D50,
        Companding::LStar,
        RgbPrimariesChromaticity::new(xy(0.67, 0.33), xy(0.21, 0.71), xy(0.14, 0.08)),
    );

    /// Create a working space
    pub const fn new(
        white_point: Xyz,
        companding: Companding,
        chromaticity: RgbPrimariesChromaticity,
    ) -> Self {
        Self {
            white_point,
            companding,
            chromaticity,
        }
    }

    /// Reference white point
    pub fn white_point(&self) -> Xyz {
        self.white_point
    }

    /// Function pair converting channels to linear and back
    pub fn companding(&self) -> Companding {
        self.companding
    }

    /// Chromaticity of the primaries
    pub fn chromaticity(&self) -> RgbPrimariesChromaticity {
        self.chromaticity
    }
}

impl PartialEq for RgbWorkingSpace {
    fn eq(&self, other: &Self) -> bool {
        self.white_point.key() == other.white_point.key()
            && self.chromaticity.key() == other.chromaticity.key()
            && self.companding == other.companding
    }
}

impl Eq for RgbWorkingSpace {}

impl Hash for RgbWorkingSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.white_point.key().hash(state);
        self.chromaticity.key().hash(state);
        self.companding.hash(state);
    }
}

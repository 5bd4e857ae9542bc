//! CIE XYZ tristimulus values

use super::Chromaticity;

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f32,
    /// Y tristimulus value (luminance)
    pub y: f32,
    /// Z tristimulus value
    pub z: f32,
}

impl Xyz {
    /// Create a new XYZ value
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Chromaticity of this value
    ///
    /// Black has no chromaticity and returns (0, 0).
    #[inline]
    pub fn chromaticity(&self) -> Chromaticity {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            Chromaticity::new(self.x / sum, self.y / sum)
        } else {
            Chromaticity::new(0.0, 0.0)
        }
    }

    /// Create XYZ from chromaticity and luminance
    #[inline]
    pub fn from_chromaticity(xy: Chromaticity, luminance: f32) -> Self {
        if xy.y > 0.0 {
            Self {
                x: (xy.x * luminance) / xy.y,
                y: luminance,
                z: ((1.0 - xy.x - xy.y) * luminance) / xy.y,
            }
        } else {
            Self::default()
        }
    }

    pub(crate) fn key(&self) -> [u32; 3] {
        self.to_array().map(super::float_key)
    }
}

impl From<[f32; 3]> for Xyz {
    fn from(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

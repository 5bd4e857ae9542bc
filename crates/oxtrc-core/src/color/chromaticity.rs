//! Chromaticity coordinates

/// CIE xy chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    /// x chromaticity coordinate
    pub x: f32,
    /// y chromaticity coordinate
    pub y: f32,
}

impl Chromaticity {
    /// Create from x and y coordinates
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Chromaticity of the red, green and blue primaries
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbPrimariesChromaticity {
    /// Red primary
    pub r: Chromaticity,
    /// Green primary
    pub g: Chromaticity,
    /// Blue primary
    pub b: Chromaticity,
}

impl RgbPrimariesChromaticity {
    /// Create from the three primaries
    pub const fn new(r: Chromaticity, g: Chromaticity, b: Chromaticity) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn key(&self) -> [u32; 6] {
        [self.r.x, self.r.y, self.g.x, self.g.y, self.b.x, self.b.y].map(super::float_key)
    }
}

//! CIE Standard Illuminant White Points
//!
//! XYZ coordinates normalized to Y = 1.0.

use super::Xyz;

/// CIE Standard Illuminant C (average daylight)
pub const C: Xyz = Xyz::new(0.98074, 1.0, 1.18232);

/// CIE Standard Illuminant D50
///
/// The ICC Profile Connection Space white point.
pub const D50: Xyz = Xyz::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D65
///
/// White point for sRGB, Adobe RGB, Rec.709 and Rec.2020.
pub const D65: Xyz = Xyz::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant E (equal energy)
pub const E: Xyz = Xyz::new(1.0, 1.0, 1.0);

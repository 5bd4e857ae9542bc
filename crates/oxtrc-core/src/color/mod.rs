//! RGB working space description
//!
//! This module provides:
//! - CIE XYZ tristimulus values and white points
//! - Chromaticity coordinates of RGB primaries
//! - Companding function pairs (encoded ↔ linear)
//! - `RgbWorkingSpace`, a value type grouping the three

pub mod chromaticity;
pub mod companding;
pub mod white_point;
pub mod working_space;
pub mod xyz;

pub use chromaticity::{Chromaticity, RgbPrimariesChromaticity};
pub use companding::Companding;
pub use white_point::{C, D50, D65, E};
pub use working_space::RgbWorkingSpace;
pub use xyz::Xyz;

/// Bit pattern used for float equality and hashing
///
/// `-0.0` and `0.0` share a key, as do all NaNs.
#[inline]
pub(crate) fn float_key(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

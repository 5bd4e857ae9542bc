//! Reference transfer functions and profile access
//!
//! Closed-form double-precision curves to compare against, and the TRC
//! tags of moxcms built-in profiles.

use oxtrc_core::TrcTag;

/// sRGB decode (encoded → linear), IEC 61966-2-1
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded < 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Simple power law decode
pub fn gamma_decode(encoded: f64, gamma: f64) -> f64 {
    encoded.powf(gamma)
}

/// Red, green and blue TRC tags of a moxcms profile
pub fn profile_trc_tags(profile: &moxcms::ColorProfile) -> Result<[TrcTag; 3], String> {
    let tag = |name: &str, trc: &Option<moxcms::ToneReprCurve>| {
        trc.as_ref()
            .map(TrcTag::from)
            .ok_or_else(|| format!("profile has no {} TRC", name))
    };

    Ok([
        tag("red", &profile.red_trc)?,
        tag("green", &profile.green_trc)?,
        tag("blue", &profile.blue_trc)?,
    ])
}

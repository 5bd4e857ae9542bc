//! Batch curve application over RGB pixel buffers
//!
//! One curve per channel, applied to every pixel. Pixels are independent,
//! so the parallel path splits the buffer into chunks without any further
//! coordination and produces the same output as the sequential one.

use multiversion::multiversion;

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::eval::{build_lut, evaluate};

/// Pixels per rayon work item
#[cfg(feature = "parallel")]
const PAR_CHUNK: usize = 4096;

/// Apply per-channel curves to RGB pixels in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_rgb(curves: &[Curve; 3], inverted: bool, pixels: &mut [[f32; 3]]) {
    for pixel in pixels.iter_mut() {
        for (channel, curve) in pixel.iter_mut().zip(curves) {
            *channel = evaluate(curve, inverted, *channel);
        }
    }
}

/// Apply per-channel curves to an interleaved RGB buffer in place
pub fn apply_interleaved_rgb(curves: &[Curve; 3], inverted: bool, data: &mut [f32]) -> Result<()> {
    let len = data.len();
    let pixels: &mut [[f32; 3]] =
        bytemuck::try_cast_slice_mut(data).map_err(|_| Error::PartialPixel { len })?;
    apply_rgb(curves, inverted, pixels);
    Ok(())
}

/// Apply per-channel curves to RGB pixels in place, across threads
#[cfg(feature = "parallel")]
pub fn apply_rgb_par(curves: &[Curve; 3], inverted: bool, pixels: &mut [[f32; 3]]) {
    use rayon::prelude::*;

    pixels
        .par_chunks_mut(PAR_CHUNK)
        .for_each(|chunk| apply_rgb(curves, inverted, chunk));
}

/// Apply per-channel curves to an 8-bit interleaved RGB buffer
///
/// Each curve is sampled once into a 256-entry table; bytes are mapped
/// through those tables.
pub fn apply_rgb8(curves: &[Curve; 3], inverted: bool, src: &[u8], dst: &mut [u8]) -> Result<()> {
    if src.len() % 3 != 0 {
        return Err(Error::PartialPixel { len: src.len() });
    }
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    let luts = curves.each_ref().map(|curve| quantize_lut(curve, inverted));
    map_rgb8(&luts, src, dst);
    Ok(())
}

fn quantize_lut(curve: &Curve, inverted: bool) -> [u8; 256] {
    let mut out = [0u8; 256];
    for (slot, v) in out.iter_mut().zip(build_lut(curve, inverted, 256)) {
        *slot = (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    }
    out
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn map_rgb8(luts: &[[u8; 256]; 3], src: &[u8], dst: &mut [u8]) {
    for (src_chunk, dst_chunk) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
        dst_chunk[0] = luts[0][src_chunk[0] as usize];
        dst_chunk[1] = luts[1][src_chunk[1] as usize];
        dst_chunk[2] = luts[2][src_chunk[2] as usize];
    }
}

//! Cartoon stylization: saturation boost followed by posterization.
//!
//! ## Per-pixel order
//! 1. `avg = (R + G + B) / 3` from the original channels
//! 2. Boost each channel away from `avg`: `C' = clamp(C + (C - avg) * boost)`,
//!    truncated to an integer
//! 3. Posterize: `C'' = clamp(round(C' / step) * step)`
//!
//! Alpha is never touched. Pixels are independent of their neighbors.

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, CHANNELS};

/// How far each channel is pushed away from the pixel's mean.
pub const SATURATION_BOOST: f32 = 0.5;

/// Posterization bucket size.
pub const POSTERIZE_STEP: u8 = 32;

/// Stylizer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    pub saturation_boost: f32,
    pub posterize_step: u8,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            saturation_boost: SATURATION_BOOST,
            posterize_step: POSTERIZE_STEP,
        }
    }
}

/// Stylize with the default parameters. Returns a new buffer.
pub fn apply(buffer: &PixelBuffer) -> PixelBuffer {
    apply_with(buffer, &StyleParams::default())
}

/// Stylize with explicit parameters. Returns a new buffer.
pub fn apply_with(buffer: &PixelBuffer, params: &StyleParams) -> PixelBuffer {
    let mut out = buffer.clone();
    stylize_pixels(out.pixels_mut(), params);
    out
}

/// Stylize RGBA pixel data in place.
///
/// # Example
/// ```ignore
/// let mut pixels = vec![200, 100, 50, 255];
/// stylize_pixels(&mut pixels, &StyleParams::default());
/// assert_eq!(pixels, vec![255, 96, 32, 255]);
/// ```
pub fn stylize_pixels(pixels: &mut [u8], params: &StyleParams) {
    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let [r, g, b] = boost_saturation(chunk[0], chunk[1], chunk[2], params.saturation_boost);
        chunk[0] = posterize_channel(r, params.posterize_step);
        chunk[1] = posterize_channel(g, params.posterize_step);
        chunk[2] = posterize_channel(b, params.posterize_step);
    }
}

/// Push each channel away from the shared mean, clamp, and truncate.
///
/// The mean is taken over the original values of all three channels.
#[inline]
pub fn boost_saturation(r: u8, g: u8, b: u8, boost: f32) -> [u8; 3] {
    let avg = (r as f32 + g as f32 + b as f32) / 3.0;
    let push = |c: u8| -> u8 {
        let c = c as f32;
        (c + (c - avg) * boost).clamp(0.0, 255.0) as u8
    };
    [push(r), push(g), push(b)]
}

/// Snap a channel to the nearest multiple of `step` (halves round up),
/// clamped to 255.
///
/// Idempotent: posterizing an already-posterized value returns it unchanged.
/// A `step` of 0 or 1 leaves the value as-is.
#[inline]
pub fn posterize_channel(value: u8, step: u8) -> u8 {
    if step <= 1 {
        return value;
    }
    let step = step as u32;
    let buckets = (2 * value as u32 + step) / (2 * step);
    (buckets * step).min(255) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

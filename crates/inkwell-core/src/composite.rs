//! Laying an edge mask over a base image.
//!
//! The edge layer is either fully opaque (edge) or fully transparent (no
//! edge), so source-over blending reduces to a per-pixel choice between the
//! mask color and the untouched base pixel.

use crate::buffer::{PixelBuffer, Rgba, CHANNELS};
use crate::edge::EdgeMask;
use crate::error::{ProcessError, ProcessResult};

/// Overlay `mask` onto `base`, painting edges in `mask_color` at full opacity.
///
/// Returns a new buffer the size of `base`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the mask and base differ in size.
pub fn overlay(
    base: &PixelBuffer,
    mask: &EdgeMask,
    mask_color: Rgba,
) -> ProcessResult<PixelBuffer> {
    if base.dimensions() != mask.dimensions() {
        return Err(ProcessError::DimensionMismatch {
            expected_width: base.width(),
            expected_height: base.height(),
            actual_width: mask.width(),
            actual_height: mask.height(),
        });
    }

    let mut out = base.clone();
    let ink = mask_color.with_full_alpha();
    let width = base.width();
    for (i, px) in out.pixels_mut().chunks_exact_mut(CHANNELS).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        if mask.is_edge(x, y) {
            px.copy_from_slice(&[ink.r, ink.g, ink.b, ink.a]);
        }
    }
    Ok(out)
}

/// [`overlay`] with black ink.
pub fn overlay_black(base: &PixelBuffer, mask: &EdgeMask) -> ProcessResult<PixelBuffer> {
    overlay(base, mask, Rgba::BLACK)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

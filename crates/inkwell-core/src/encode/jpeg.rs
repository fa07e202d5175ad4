//! JPEG encoding for outlines, illustrations and thumbnails.
//!
//! JPEG has no alpha channel, so alpha is discarded and the stored RGB
//! values are written as-is.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::PixelBuffer;
use crate::error::{ProcessError, ProcessResult};

/// Encode a buffer to JPEG bytes.
///
/// # Arguments
///
/// * `buffer` - Source pixels (alpha is dropped)
/// * `quality` - JPEG quality, clamped to 1-100
///
/// # Quality Guidelines
///
/// * 90-100: High quality, used for conversion outputs
/// * 80: Template thumbnails
/// * Below 60: Visible artifacts around edge lines
///
/// # Errors
///
/// Returns `ProcessError::Io` if the encoder fails.
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> ProcessResult<Vec<u8>> {
    let quality = quality.clamp(1, 100);
    let rgb = buffer.to_rgb_bytes();

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(&rgb, buffer.width(), buffer.height(), ExtendedColorType::Rgb8)
        .map_err(|e| ProcessError::Io(format!("JPEG encoding failed: {e}")))?;

    Ok(out)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

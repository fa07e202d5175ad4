//! Square template previews.

use crate::buffer::PixelBuffer;
use crate::error::ProcessResult;

/// Edge length of template thumbnails, in pixels.
pub const THUMBNAIL_SIZE: u32 = 200;

/// JPEG quality used when a thumbnail is written to disk.
pub const THUMBNAIL_QUALITY: u8 = 80;

/// Produces fixed-size square previews by center-cropping then resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnailer {
    size: u32,
}

impl Default for Thumbnailer {
    fn default() -> Self {
        Self::new(THUMBNAIL_SIZE)
    }
}

impl Thumbnailer {
    /// Thumbnailer producing `size x size` output.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Crop the largest centered square out of `buffer` and resize it
    /// (bilinear) to `size x size`.
    ///
    /// The output is always exactly `size x size`, whatever the input's
    /// aspect ratio. Smaller inputs are upscaled.
    pub fn make(&self, buffer: &PixelBuffer) -> ProcessResult<PixelBuffer> {
        let (x, y, side) = centered_square(buffer.width(), buffer.height());
        let square = buffer.crop(x, y, side, side)?;
        let thumb = square.resize(self.size, self.size)?;

        tracing::debug!(
            source_width = buffer.width(),
            source_height = buffer.height(),
            crop_x = x,
            crop_y = y,
            side,
            "Generated thumbnail"
        );

        Ok(thumb)
    }
}

/// `(x, y, side)` of the largest square centered in a `width x height` image.
///
/// Offsets are floored, so odd leftovers favor the right/bottom edge.
pub fn centered_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

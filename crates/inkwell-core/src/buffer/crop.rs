//! Pixel-rectangle cropping.
//!
//! Unlike normalized crops, the rectangle here is given in whole pixels and
//! must lie entirely inside the source. Nothing is clamped.

use super::{PixelBuffer, CHANNELS};
use crate::error::{ProcessError, ProcessResult};

/// Copy the `width x height` rectangle whose top-left corner is `(x, y)`.
///
/// # Errors
///
/// * `InvalidDimensions` if `width` or `height` is zero
/// * `OutOfRange` if the rectangle extends past the source bounds
pub fn crop(
    image: &PixelBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> ProcessResult<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidDimensions { width, height });
    }

    let (src_w, src_h) = image.dimensions();
    let right = x as u64 + width as u64;
    let bottom = y as u64 + height as u64;
    if right > src_w as u64 || bottom > src_h as u64 {
        return Err(ProcessError::OutOfRange {
            x,
            y,
            width,
            height,
            bounds_width: src_w,
            bounds_height: src_h,
        });
    }

    if x == 0 && y == 0 && width == src_w && height == src_h {
        return Ok(image.clone());
    }

    let src = image.as_raw();
    let row_bytes = width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * height as usize);

    // Whole rows are contiguous in both buffers
    for row in y..y + height {
        let start = (row as usize * src_w as usize + x as usize) * CHANNELS;
        output.extend_from_slice(&src[start..start + row_bytes]);
    }

    PixelBuffer::new(width, height, output)
}

impl PixelBuffer {
    /// See [`crop`].
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> ProcessResult<PixelBuffer> {
        crop(self, x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgba;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = test_image(20, 10);
        let result = img.crop(0, 0, 20, 10).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_interior_crop() {
        let img = test_image(10, 10);
        let result = img.crop(2, 3, 4, 5).unwrap();

        assert_eq!(result.dimensions(), (4, 5));
        // (0, 0) of the crop is (2, 3) of the source: 3 * 10 + 2 = 32
        assert_eq!(result.get(0, 0).unwrap(), Rgba::opaque(32, 32, 32));
        // (3, 4) of the crop is (5, 7) of the source: 7 * 10 + 5 = 75
        assert_eq!(result.get(3, 4).unwrap(), Rgba::opaque(75, 75, 75));
    }

    #[test]
    fn test_crop_touching_far_edge() {
        let img = test_image(8, 6);
        let result = img.crop(5, 4, 3, 2).unwrap();
        assert_eq!(result.dimensions(), (3, 2));
        assert_eq!(result.get(2, 1).unwrap(), img.get(7, 5).unwrap());
    }

    #[test]
    fn test_crop_past_right_edge() {
        let img = test_image(8, 6);
        let result = img.crop(5, 0, 4, 2);
        assert!(matches!(
            result,
            Err(ProcessError::OutOfRange {
                x: 5,
                width: 4,
                bounds_width: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_crop_past_bottom_edge() {
        let img = test_image(8, 6);
        assert!(matches!(
            img.crop(0, 6, 1, 1),
            Err(ProcessError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_crop_overflowing_coordinates() {
        let img = test_image(8, 6);
        assert!(matches!(
            img.crop(u32::MAX, 0, 2, 2),
            Err(ProcessError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_crop_zero_size() {
        let img = test_image(8, 6);
        assert!(matches!(
            img.crop(0, 0, 0, 3),
            Err(ProcessError::InvalidDimensions { .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

//! Resampling.
//!
//! The pipeline always resizes with [`FilterType::Bilinear`] (the `image`
//! crate's triangle filter). Thumbnails and any test that compares pixels
//! after a resize depend on that choice staying fixed.

use super::{FilterType, PixelBuffer};
use crate::error::{ProcessError, ProcessResult};

/// Resize an image to exact dimensions.
///
/// Returns a new buffer; the input is untouched. A resize to the current
/// dimensions returns a clone.
///
/// # Errors
///
/// Returns `ProcessError::InvalidDimensions` if a target dimension is zero.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> ProcessResult<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidDimensions { width, height });
    }

    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }

    let resized =
        image::imageops::resize(&image.to_rgba_image(), width, height, filter.to_image_filter());

    PixelBuffer::from_rgba_image(resized)
}

impl PixelBuffer {
    /// Bilinear resize to `width x height`.
    pub fn resize(&self, width: u32, height: u32) -> ProcessResult<PixelBuffer> {
        resize(self, width, height, FilterType::Bilinear)
    }

    /// Resize with an explicit filter.
    pub fn resize_with(
        &self,
        width: u32,
        height: u32,
        filter: FilterType,
    ) -> ProcessResult<PixelBuffer> {
        resize(self, width, height, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgba;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = img.resize(50, 25).unwrap();

        assert_eq!(resized.dimensions(), (50, 25));
        assert_eq!(resized.as_raw().len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions_is_identity() {
        let img = create_test_image(30, 20);
        let resized = img.resize(30, 20).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(10, 5);
        let resized = img.resize_with(40, 20, FilterType::Lanczos3).unwrap();
        assert_eq!(resized.dimensions(), (40, 20));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            img.resize(0, 50),
            Err(ProcessError::InvalidDimensions { .. })
        ));
        assert!(img.resize(50, 0).is_err());
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let gray = Rgba::opaque(128, 128, 128);
        let img = PixelBuffer::filled(4, 4, gray).unwrap();

        let resized = img.resize(200, 200).unwrap();

        assert_eq!(resized.dimensions(), (200, 200));
        for y in 0..200 {
            for x in 0..200 {
                assert_eq!(resized.get(x, y).unwrap(), gray);
            }
        }
    }

    #[test]
    fn test_nearest_upscale_replicates_pixels() {
        let mut img = PixelBuffer::filled(2, 1, Rgba::WHITE).unwrap();
        img.set(1, 0, Rgba::BLACK).unwrap();

        let resized = img.resize_with(4, 1, FilterType::Nearest).unwrap();

        assert_eq!(resized.get(0, 0).unwrap(), Rgba::WHITE);
        assert_eq!(resized.get(1, 0).unwrap(), Rgba::WHITE);
        assert_eq!(resized.get(2, 0).unwrap(), Rgba::BLACK);
        assert_eq!(resized.get(3, 0).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = img.resize_with(50, 25, filter).unwrap();
            assert_eq!(resized.dimensions(), (50, 25));
        }
    }
}

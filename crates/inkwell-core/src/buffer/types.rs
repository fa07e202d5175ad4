//! Core raster types: pixels, buffers and resampling filters.

use serde::{Deserialize, Serialize};

use crate::error::{ProcessError, ProcessResult};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A single RGBA8 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the default edge color.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white, the outline background.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// The same color at full opacity.
    #[inline]
    pub const fn with_full_alpha(self) -> Self {
        Self::new(self.r, self.g, self.b, 255)
    }

    /// Sum of absolute per-channel RGB differences (alpha ignored).
    #[inline]
    pub fn rgb_distance(self, other: Rgba) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, blocky).
    Nearest,
    /// Bilinear interpolation. Used for every resize the pipeline performs.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, sharpest).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A decoded image held as RGBA8 samples in row-major order.
///
/// Buffers are plain owned values. Every stage that transforms a buffer
/// returns a new one, so a source image can be fed to several stages
/// without being disturbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA data.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` if either dimension is zero or the byte length
    ///   overflows `usize`
    /// * `InvalidPixelData` if `pixels.len() != width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> ProcessResult<Self> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(ProcessError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> ProcessResult<Self> {
        let len = byte_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an `image::RgbaImage`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for an empty image.
    pub fn from_rgba_image(img: image::RgbaImage) -> ProcessResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Copy into an `image::RgbaImage` for use with `image::imageops`.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Raw RGBA samples.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return its RGBA samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// RGB samples with alpha dropped, as JPEG encoders expect.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() as usize * 3);
        for chunk in self.pixels.chunks_exact(CHANNELS) {
            rgb.extend_from_slice(&chunk[..3]);
        }
        rgb
    }

    /// Whether `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` outside `[0, width) x [0, height)`.
    pub fn get(&self, x: u32, y: u32) -> ProcessResult<Rgba> {
        if !self.contains(x, y) {
            return Err(ProcessError::pixel_out_of_range(x, y, self.width, self.height));
        }
        Ok(self.pixel(x, y))
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` outside `[0, width) x [0, height)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) -> ProcessResult<()> {
        if !self.contains(x, y) {
            return Err(ProcessError::pixel_out_of_range(x, y, self.width, self.height));
        }
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        Ok(())
    }

    /// Unchecked read for scans that have already bounded their loops.
    #[inline]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = self.index(x, y);
        Rgba::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * CHANNELS
    }
}

/// RGBA byte length of a `width` x `height` image.
fn byte_len(width: u32, height: u32) -> ProcessResult<usize> {
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(CHANNELS))
        .ok_or(ProcessError::InvalidDimensions { width, height })
}

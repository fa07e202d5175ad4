//! The decoded raster image and the operations every stage builds on.
//!
//! This module provides:
//! - Decoding JPEG/PNG bytes (with EXIF orientation) into a [`PixelBuffer`]
//! - Bounds-checked pixel access
//! - Pixel-rectangle cropping
//! - Bilinear resizing
//! - Encoding back to a file (see [`crate::encode`])
//!
//! # Layout
//!
//! A buffer always holds RGBA8 samples in row-major order, four bytes per
//! pixel. JPEG sources decode with alpha 255.
//!
//! # Examples
//!
//! ```ignore
//! use inkwell_core::buffer::PixelBuffer;
//!
//! let photo = PixelBuffer::load("photo.jpg")?;
//! let corner = photo.crop(0, 0, 64, 64)?;
//! corner.encode("corner.png", 90)?;
//! ```

mod crop;
mod decode;
mod resize;
mod types;

pub use crop::crop;
pub use decode::{decode, load, read_orientation, Orientation};
pub use resize::resize;
pub use types::{FilterType, PixelBuffer, Rgba, CHANNELS};

use std::path::Path;

use crate::error::ProcessResult;

impl PixelBuffer {
    /// Decode JPEG or PNG bytes. See [`decode`].
    pub fn decode(bytes: &[u8]) -> ProcessResult<PixelBuffer> {
        decode::decode(bytes)
    }

    /// Read and decode an image file. See [`load`].
    pub fn load(path: impl AsRef<Path>) -> ProcessResult<PixelBuffer> {
        decode::load(path)
    }

    /// Encode to `path`, choosing the codec from its extension.
    /// See [`crate::encode::write_image`].
    pub fn encode(&self, path: impl AsRef<Path>, quality: u8) -> ProcessResult<()> {
        crate::encode::write_image(self, path, quality)
    }
}

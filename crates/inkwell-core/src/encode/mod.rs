//! Image encoding for pipeline outputs.
//!
//! This module provides:
//! - Encoding a [`PixelBuffer`] to JPEG bytes with configurable quality
//! - Encoding to lossless PNG bytes (alpha preserved)
//! - Writing an encoded buffer to disk, picking the codec from the path
//!
//! Encoding always completes in memory before anything touches the
//! filesystem, so a failed encode never leaves a truncated output file.
//!
//! # Examples
//!
//! ```ignore
//! use inkwell_core::encode::{encode_jpeg, write_image};
//!
//! let jpeg_bytes = encode_jpeg(&buffer, 80)?;
//! write_image(&buffer, "outline-1700000000000.jpg", 90)?;
//! ```

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{ProcessError, ProcessResult};

/// Output codec, chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// `.png` (any case) selects PNG; everything else is written as JPEG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Jpeg,
        }
    }
}

/// Encode `buffer` and write it to `path`.
///
/// `quality` only applies to JPEG output.
///
/// # Errors
///
/// Returns `ProcessError::Io` if encoding fails or the file cannot be written.
pub fn write_image(buffer: &PixelBuffer, path: impl AsRef<Path>, quality: u8) -> ProcessResult<()> {
    let path = path.as_ref();
    let bytes = match OutputFormat::from_path(path) {
        OutputFormat::Jpeg => encode_jpeg(buffer, quality)?,
        OutputFormat::Png => encode_png(buffer)?,
    };
    std::fs::write(path, bytes)
        .map_err(|e| ProcessError::Io(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "Wrote encoded image");
    Ok(())
}

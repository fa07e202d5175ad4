//! Error types for the Inkwell processing pipeline.
//!
//! Every failure is terminal for the operation that raised it. Callers map
//! these onto whatever transport they serve (HTTP status codes, JS exceptions).

use thiserror::Error;

/// Errors raised by buffer operations, profiling and the conversion pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The image bytes are corrupt, truncated, or in an unsupported format.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// A pixel access or crop rectangle falls outside the buffer.
    #[error(
        "Region {width}x{height} at ({x}, {y}) is outside the {bounds_width}x{bounds_height} buffer"
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        bounds_width: u32,
        bounds_height: u32,
    },

    /// Color profiling was asked to summarize zero pixels.
    #[error("No pixels to profile")]
    EmptyInput,

    /// Reading, encoding or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Two buffers that must share a size do not.
    #[error("Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

impl ProcessError {
    /// Out-of-range error for a single pixel coordinate.
    pub(crate) fn pixel_out_of_range(
        x: u32,
        y: u32,
        bounds_width: u32,
        bounds_height: u32,
    ) -> Self {
        ProcessError::OutOfRange {
            x,
            y,
            width: 1,
            height: 1,
            bounds_width,
            bounds_height,
        }
    }
}

impl From<std::io::Error> for ProcessError {
    fn from(err: std::io::Error) -> Self {
        ProcessError::Io(err.to_string())
    }
}

/// Convenience alias for pipeline results.
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

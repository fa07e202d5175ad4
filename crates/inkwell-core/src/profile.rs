//! Aggregate color profiling across one or more images.
//!
//! Used at template registration to summarize the template's images into a
//! [`StyleProfile`].

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::{ProcessError, ProcessResult};
use crate::{DominantColor, StyleProfile};

/// Running RGB sums and pixel count.
///
/// Feed buffers one at a time with [`ColorSample::add`] so callers never
/// need to hold every image in memory, then [`ColorSample::finish`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSample {
    pub sum_r: u64,
    pub sum_g: u64,
    pub sum_b: u64,
    pub count: u64,
}

impl ColorSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate every pixel of `buffer`, row-major. Alpha is ignored.
    pub fn add(&mut self, buffer: &PixelBuffer) {
        for chunk in buffer.as_raw().chunks_exact(CHANNELS) {
            self.sum_r += chunk[0] as u64;
            self.sum_g += chunk[1] as u64;
            self.sum_b += chunk[2] as u64;
        }
        self.count += buffer.pixel_count();
    }

    /// Finalize into a profile.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::EmptyInput` if no pixels were accumulated.
    pub fn finish(&self) -> ProcessResult<StyleProfile> {
        if self.count == 0 {
            return Err(ProcessError::EmptyInput);
        }
        Ok(StyleProfile {
            dominant_color: DominantColor {
                r: rounded_mean(self.sum_r, self.count),
                g: rounded_mean(self.sum_g, self.count),
                b: rounded_mean(self.sum_b, self.count),
            },
            color_count: self.count,
        })
    }
}

/// Average color and total pixel count across `buffers`, in order.
///
/// # Errors
///
/// Returns `ProcessError::EmptyInput` when `buffers` is empty.
///
/// # Example
/// ```ignore
/// let profile = compute(&[photo_a, photo_b])?;
/// println!("{:?} over {} pixels", profile.dominant_color, profile.color_count);
/// ```
pub fn compute(buffers: &[PixelBuffer]) -> ProcessResult<StyleProfile> {
    let mut sample = ColorSample::new();
    for buffer in buffers {
        sample.add(buffer);
    }
    sample.finish()
}

/// `round(sum / count)` with halves rounded up, in integer arithmetic.
#[inline]
fn rounded_mean(sum: u64, count: u64) -> u8 {
    ((sum * 2 + count) / (count * 2)).min(255) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

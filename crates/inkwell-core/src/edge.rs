//! Gradient-based edge detection.
//!
//! ## Algorithm
//!
//! For every interior pixel `(x, y)` the detector compares the two
//! horizontal neighbors and the two vertical neighbors:
//!
//! ```text
//! diff_x = |R(x-1,y) - R(x+1,y)| + |G(x-1,y) - G(x+1,y)| + |B(x-1,y) - B(x+1,y)|
//! diff_y = |R(x,y-1) - R(x,y+1)| + |G(x,y-1) - G(x,y+1)| + |B(x,y-1) - B(x,y+1)|
//! edge   = diff_x > threshold || diff_y > threshold
//! ```
//!
//! The source is only read and the result goes to a separate [`EdgeMask`],
//! so no comparison ever sees a value the detector produced. The one-pixel
//! border has no complete neighborhood and is never an edge.

use crate::buffer::{PixelBuffer, Rgba, CHANNELS};
use crate::error::{ProcessError, ProcessResult};

/// Default gradient threshold (sum of absolute per-channel differences).
pub const EDGE_THRESHOLD: u32 = 100;

/// What non-edge pixels become when a mask is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeBackground {
    /// Opaque white, for standalone line art.
    #[default]
    White,
    /// Fully transparent, for layering over another image.
    Transparent,
}

impl EdgeBackground {
    pub fn color(self) -> Rgba {
        match self {
            EdgeBackground::White => Rgba::WHITE,
            EdgeBackground::Transparent => Rgba::TRANSPARENT,
        }
    }
}

/// Boolean edge grid with the same dimensions as its source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    width: u32,
    height: u32,
    edges: Vec<bool>,
}

impl EdgeMask {
    /// All-false mask.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::InvalidDimensions`] if `width * height` does
    /// not fit in memory addressing.
    pub fn empty(width: u32, height: u32) -> ProcessResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(ProcessError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            edges: vec![false; len],
        })
    }

    /// All-false mask sized to `buffer`, whose pixel count is already known
    /// to be addressable.
    pub(crate) fn blank_for(buffer: &PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            width,
            height,
            edges: vec![false; buffer.as_raw().len() / CHANNELS],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether `(x, y)` is an edge. Coordinates outside the mask are not.
    #[inline]
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.edges[self.index(x, y)]
    }

    /// Number of edge pixels.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }

    /// Draw the mask: `edge_color` on edges, `background` elsewhere.
    pub fn render(
        &self,
        background: EdgeBackground,
        edge_color: Rgba,
    ) -> ProcessResult<PixelBuffer> {
        let mut out = PixelBuffer::filled(self.width, self.height, background.color())?;
        let edge = edge_color.with_full_alpha();
        for (px, &is_edge) in out.pixels_mut().chunks_exact_mut(CHANNELS).zip(&self.edges) {
            if is_edge {
                px.copy_from_slice(&[edge.r, edge.g, edge.b, edge.a]);
            }
        }
        Ok(out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn mark(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.edges[idx] = true;
    }
}

/// Detect edges with the default threshold of 100.
pub fn detect(buffer: &PixelBuffer) -> EdgeMask {
    detect_with_threshold(buffer, EDGE_THRESHOLD)
}

/// Detect edges, marking interior pixels whose horizontal or vertical
/// neighbor difference exceeds `threshold`.
///
/// Scans row-major, top to bottom and left to right. Images narrower or
/// shorter than three pixels have no interior and yield an empty mask.
pub fn detect_with_threshold(buffer: &PixelBuffer, threshold: u32) -> EdgeMask {
    let (width, height) = buffer.dimensions();
    let mut mask = EdgeMask::blank_for(buffer);
    if width < 3 || height < 3 {
        return mask;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let diff_x = buffer.pixel(x - 1, y).rgb_distance(buffer.pixel(x + 1, y));
            let diff_y = buffer.pixel(x, y - 1).rgb_distance(buffer.pixel(x, y + 1));
            if diff_x > threshold || diff_y > threshold {
                mask.mark(x, y);
            }
        }
    }

    tracing::debug!(width, height, edges = mask.edge_count(), "Edge detection complete");
    mask
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Inkwell Core - outline and cartoon rendering for photographs
//!
//! This crate turns a photograph into a line-art outline and/or a
//! posterized "cartoon" illustration, and profiles template images into a
//! [`StyleProfile`]. HTTP handling and file bookkeeping live outside it; the
//! crate works on filesystem paths and in-memory buffers only.
//!
//! # Module Structure
//!
//! - `buffer` - Decoded RGBA images: decode, pixel access, crop, resize
//! - `encode` - JPEG/PNG encoding and writing outputs
//! - `profile` - Average color across images
//! - `thumbnail` - Centered-square template previews
//! - `edge` - Gradient edge detection
//! - `stylize` - Saturation boost + posterization
//! - `composite` - Edge mask overlay
//! - `pipeline` - Conversion and template profiling orchestration
//! - `registry` - Template repository interface and in-memory store
//! - `config` - TOML-loadable settings

pub mod buffer;
pub mod composite;
pub mod config;
pub mod edge;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod registry;
pub mod stylize;
pub mod thumbnail;

pub use buffer::{FilterType, PixelBuffer, Rgba};
pub use config::{ConfigError, PipelineConfig};
pub use edge::{EdgeBackground, EdgeMask};
pub use error::{ProcessError, ProcessResult};
pub use pipeline::{
    ConversionOptions, ConversionOutput, ConversionPipeline, TemplateProfile, TemplateProfiler,
};
pub use registry::{
    InMemoryTemplateRepository, RegistryError, Template, TemplateRegistrar, TemplateRepository,
};
pub use stylize::StyleParams;
pub use thumbnail::Thumbnailer;

/// Average RGB color of a set of images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DominantColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DominantColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// As an opaque pixel.
    pub fn to_rgba(self) -> Rgba {
        Rgba::opaque(self.r, self.g, self.b)
    }
}

/// Aggregate color statistics for a template, computed once at registration.
///
/// `color_count` is the total number of pixels across every profiled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub dominant_color: DominantColor,
    pub color_count: u64,
}

//! Pipeline configuration.
//!
//! Every field has a default, and the defaults are the constants that make
//! outputs interchangeable between deployments: edge threshold 100,
//! saturation boost 0.5, posterize step 32, 200x200 thumbnails at quality 80.
//! A TOML file only needs to name the values it changes.
//!
//! ```toml
//! [output]
//! dir = "/srv/inkwell/outputs"
//! quality = 95
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::edge::EDGE_THRESHOLD;
use crate::stylize::StyleParams;
use crate::thumbnail::{THUMBNAIL_QUALITY, THUMBNAIL_SIZE};

/// Default JPEG quality for outline and colored outputs.
pub const OUTPUT_QUALITY: u8 = 90;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub edge: EdgeConfig,
    pub stylize: StyleParams,
    pub thumbnail: ThumbnailConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Neighbor difference (summed over R, G, B) an edge must exceed.
    pub threshold: u32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            threshold: EDGE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Edge length of the square thumbnail.
    pub size: u32,
    /// JPEG quality (1-100).
    pub quality: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: THUMBNAIL_SIZE,
            quality: THUMBNAIL_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory outlines, illustrations and thumbnails are written to.
    pub dir: PathBuf,
    /// JPEG quality for conversion outputs (1-100).
    pub quality: u8,
    /// Prefix for the thumbnail URL stored on template records.
    pub url_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outputs"),
            quality: OUTPUT_QUALITY,
            url_prefix: "/outputs".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Copy with a different output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }

    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stylize.posterize_step == 0 {
            return Err(ConfigError::Validation(
                "stylize.posterize_step must be > 0".into(),
            ));
        }
        if !self.stylize.saturation_boost.is_finite() || self.stylize.saturation_boost < 0.0 {
            return Err(ConfigError::Validation(
                "stylize.saturation_boost must be a non-negative number".into(),
            ));
        }
        if self.thumbnail.size == 0 {
            return Err(ConfigError::Validation(
                "thumbnail.size must be > 0".into(),
            ));
        }
        if !(1..=100).contains(&self.thumbnail.quality) {
            return Err(ConfigError::Validation(
                "thumbnail.quality must be between 1 and 100".into(),
            ));
        }
        if !(1..=100).contains(&self.output.quality) {
            return Err(ConfigError::Validation(
                "output.quality must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

//! Photo conversion: outline and colored illustration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, Rgba};
use crate::composite;
use crate::config::PipelineConfig;
use crate::edge::{self, EdgeBackground, EdgeMask};
use crate::error::{ProcessError, ProcessResult};
use crate::stylize;
use crate::StyleProfile;

/// Which outputs a conversion request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    pub generate_outline: bool,
    pub generate_colored: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            generate_outline: true,
            generate_colored: true,
        }
    }
}

/// Files written by [`ConversionPipeline::convert`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutput {
    pub outline: Option<PathBuf>,
    pub colored: Option<PathBuf>,
}

/// In-memory outputs of [`ConversionPipeline::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedImages {
    pub outline: Option<PixelBuffer>,
    pub colored: Option<PixelBuffer>,
}

/// Runs edge detection, stylization and compositing for one photo.
#[derive(Debug, Clone, Default)]
pub struct ConversionPipeline {
    config: PipelineConfig,
}

impl ConversionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Produce the requested images without touching the filesystem.
    ///
    /// Both requested branches run; if either fails the first error is
    /// returned.
    pub fn render(
        &self,
        source: &PixelBuffer,
        options: &ConversionOptions,
    ) -> ProcessResult<RenderedImages> {
        let mask = self.detect(source, options);
        let (outline, colored) = run_branches(
            options,
            || self.outline(&mask),
            || self.colored(source, &mask),
        )?;
        Ok(RenderedImages { outline, colored })
    }

    /// Load the photo at `source`, render the requested images and write
    /// them to the output directory as `outline-<ms>.jpg` and
    /// `colored-<ms>.jpg`.
    ///
    /// `style` is recorded but does not influence the rendering.
    ///
    /// Names are unique per millisecond only. Two conversions into the same
    /// directory within one millisecond overwrite each other's files; hosts
    /// that convert concurrently should give each request its own output
    /// directory.
    ///
    /// # Errors
    ///
    /// A source that cannot be read or decoded fails before any output is
    /// produced. Otherwise both branches run and the first failure is
    /// returned; files already written by the other branch are left in
    /// place.
    pub fn convert(
        &self,
        source: impl AsRef<Path>,
        options: &ConversionOptions,
        style: Option<&StyleProfile>,
    ) -> ProcessResult<ConversionOutput> {
        let source = source.as_ref();
        let buffer = PixelBuffer::load(source)?;
        tracing::debug!(
            path = %source.display(),
            width = buffer.width(),
            height = buffer.height(),
            "Loaded conversion source"
        );
        self.convert_buffer(&buffer, options, style)
    }

    /// [`convert`](Self::convert) for an already-decoded photo.
    pub fn convert_buffer(
        &self,
        source: &PixelBuffer,
        options: &ConversionOptions,
        style: Option<&StyleProfile>,
    ) -> ProcessResult<ConversionOutput> {
        let stamp = chrono::Utc::now().timestamp_millis();
        self.convert_stamped(source, options, style, stamp)
    }

    fn convert_stamped(
        &self,
        source: &PixelBuffer,
        options: &ConversionOptions,
        style: Option<&StyleProfile>,
        stamp: i64,
    ) -> ProcessResult<ConversionOutput> {
        let start = Instant::now();
        if let Some(style) = style {
            tracing::debug!(
                r = style.dominant_color.r,
                g = style.dominant_color.g,
                b = style.dominant_color.b,
                color_count = style.color_count,
                "Conversion requested with template style"
            );
        }

        let mask = self.detect(source, options);
        let (outline, colored) = run_branches(
            options,
            || {
                let image = self.outline(&mask)?;
                self.write_output(&image, &format!("outline-{stamp}.jpg"))
            },
            || {
                let image = self.colored(source, &mask)?;
                self.write_output(&image, &format!("colored-{stamp}.jpg"))
            },
        )?;

        tracing::debug!("Conversion finished in {:?}", start.elapsed());
        Ok(ConversionOutput { outline, colored })
    }

    /// Edge mask of the untouched source, shared by both branches.
    fn detect(&self, source: &PixelBuffer, options: &ConversionOptions) -> EdgeMask {
        if options.generate_outline || options.generate_colored {
            edge::detect_with_threshold(source, self.config.edge.threshold)
        } else {
            EdgeMask::blank_for(source)
        }
    }

    /// Black line art on white.
    fn outline(&self, mask: &EdgeMask) -> ProcessResult<PixelBuffer> {
        mask.render(EdgeBackground::White, Rgba::BLACK)
    }

    /// Stylized copy of the source with the edges inked on top.
    fn colored(&self, source: &PixelBuffer, mask: &EdgeMask) -> ProcessResult<PixelBuffer> {
        let stylized = stylize::apply_with(source, &self.config.stylize);
        composite::overlay_black(&stylized, mask)
    }

    fn write_output(&self, image: &PixelBuffer, file_name: &str) -> ProcessResult<PathBuf> {
        let path = self.config.output.dir.join(file_name);
        image.encode(&path, self.config.output.quality)?;
        tracing::info!(path = %path.display(), "Wrote conversion output");
        Ok(path)
    }
}

/// Run each requested branch, even after the other has failed.
///
/// Failures are logged as they happen; the first one is returned.
fn run_branches<O, C>(
    options: &ConversionOptions,
    outline: impl FnOnce() -> ProcessResult<O>,
    colored: impl FnOnce() -> ProcessResult<C>,
) -> ProcessResult<(Option<O>, Option<C>)> {
    let mut first_error = None;
    let outline = if options.generate_outline {
        keep_first_error(outline(), "outline", &mut first_error)
    } else {
        None
    };
    let colored = if options.generate_colored {
        keep_first_error(colored(), "colored", &mut first_error)
    } else {
        None
    };

    match first_error {
        Some(err) => Err(err),
        None => Ok((outline, colored)),
    }
}

fn keep_first_error<T>(
    result: ProcessResult<T>,
    branch: &str,
    first_error: &mut Option<ProcessError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(branch, error = %err, "Conversion branch failed");
            first_error.get_or_insert(err);
            None
        }
    }
}

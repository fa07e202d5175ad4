//! Template registration: thumbnail plus color profile.

use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::config::PipelineConfig;
use crate::error::{ProcessError, ProcessResult};
use crate::profile::ColorSample;
use crate::thumbnail::Thumbnailer;
use crate::StyleProfile;

/// File name of a template's thumbnail.
pub fn thumbnail_file_name(template_id: u64) -> String {
    format!("thumbnail-{template_id}.jpg")
}

/// What registration derives from a template's images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateProfile {
    /// Where the thumbnail was written.
    pub thumbnail: PathBuf,
    pub style: StyleProfile,
}

/// Thumbnails the first image and profiles all of them.
#[derive(Debug, Clone)]
pub struct TemplateProfiler {
    thumbnailer: Thumbnailer,
    quality: u8,
    output_dir: PathBuf,
}

impl Default for TemplateProfiler {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

impl TemplateProfiler {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            thumbnailer: Thumbnailer::new(config.thumbnail.size),
            quality: config.thumbnail.quality,
            output_dir: config.output.dir.clone(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Profile the images at `paths`, loading them one at a time.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `paths` is empty; `Io`/`Decode` for the first
    /// image that cannot be loaded; `Io` if the thumbnail cannot be written.
    pub fn profile<P: AsRef<Path>>(
        &self,
        template_id: u64,
        paths: &[P],
    ) -> ProcessResult<TemplateProfile> {
        let (first, rest) = paths.split_first().ok_or(ProcessError::EmptyInput)?;

        let first = PixelBuffer::load(first)?;
        let thumbnail = self.write_thumbnail(template_id, &first)?;

        let mut sample = ColorSample::new();
        sample.add(&first);
        drop(first);
        for path in rest {
            sample.add(&PixelBuffer::load(path)?);
        }

        self.finish(template_id, thumbnail, &sample, paths.len())
    }

    /// [`profile`](Self::profile) for already-decoded images.
    pub fn profile_buffers(
        &self,
        template_id: u64,
        buffers: &[PixelBuffer],
    ) -> ProcessResult<TemplateProfile> {
        let first = buffers.first().ok_or(ProcessError::EmptyInput)?;
        let thumbnail = self.write_thumbnail(template_id, first)?;

        let mut sample = ColorSample::new();
        for buffer in buffers {
            sample.add(buffer);
        }

        self.finish(template_id, thumbnail, &sample, buffers.len())
    }

    fn write_thumbnail(&self, template_id: u64, image: &PixelBuffer) -> ProcessResult<PathBuf> {
        let thumb = self.thumbnailer.make(image)?;
        let path = self.output_dir.join(thumbnail_file_name(template_id));
        thumb.encode(&path, self.quality)?;
        Ok(path)
    }

    fn finish(
        &self,
        template_id: u64,
        thumbnail: PathBuf,
        sample: &ColorSample,
        images: usize,
    ) -> ProcessResult<TemplateProfile> {
        let style = sample.finish()?;
        tracing::info!(
            template_id,
            images,
            thumbnail = %thumbnail.display(),
            color_count = style.color_count,
            "Profiled template"
        );
        Ok(TemplateProfile { thumbnail, style })
    }
}

//! Request-level orchestration.
//!
//! - [`ConversionPipeline`] turns one photo into an outline and/or a colored
//!   illustration and writes them to the output directory.
//! - [`TemplateProfiler`] turns a template's images into a thumbnail file and
//!   a [`StyleProfile`](crate::StyleProfile).
//!
//! Both work synchronously and keep every buffer local to the call.

mod convert;
mod template;

pub use convert::{ConversionOptions, ConversionOutput, ConversionPipeline, RenderedImages};
pub use template::{thumbnail_file_name, TemplateProfile, TemplateProfiler};

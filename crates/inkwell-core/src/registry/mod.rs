//! Template records and where they are kept.
//!
//! The pipeline never talks to storage directly. A host injects a
//! [`TemplateRepository`] into a [`TemplateRegistrar`], which validates the
//! request, runs the [`TemplateProfiler`] and stores the resulting
//! [`Template`].

mod memory;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::error::ProcessError;
use crate::pipeline::{thumbnail_file_name, TemplateProfiler};
use crate::StyleProfile;

pub use memory::InMemoryTemplateRepository;

/// Fewest images a template can be registered with.
pub const MIN_TEMPLATE_IMAGES: usize = 5;

/// Registry-specific errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("A template needs at least {required} images, got {provided}")]
    TooFewImages { required: usize, provided: usize },

    #[error("Template {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// A registered drawing template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: u64,
    pub name: String,
    pub image_count: usize,
    pub thumbnail_url: String,
    pub style_data: StyleProfile,
    pub created_at: DateTime<Utc>,
}

/// Storage for templates, shared between concurrent request handlers.
pub trait TemplateRepository: Send + Sync {
    /// Reserve a fresh, never-reused id.
    fn next_id(&self) -> u64;

    /// Store `template`, replacing any record with the same id.
    fn insert(&self, template: Template);

    fn get(&self, id: u64) -> Option<Template>;

    /// All templates, ordered by id.
    fn list(&self) -> Vec<Template>;

    /// Change a template's name and return the updated record.
    fn rename(&self, id: u64, name: &str) -> RegistryResult<Template>;

    /// Remove a template and return it.
    fn remove(&self, id: u64) -> RegistryResult<Template>;
}

/// Validates, profiles and stores new templates.
pub struct TemplateRegistrar<R> {
    repository: R,
    profiler: TemplateProfiler,
    url_prefix: String,
}

impl<R: TemplateRepository> TemplateRegistrar<R> {
    pub fn new(repository: R, config: &PipelineConfig) -> Self {
        Self {
            repository,
            profiler: TemplateProfiler::new(config),
            url_prefix: config.output.url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Register a template built from the images at `paths`.
    ///
    /// # Errors
    ///
    /// `TooFewImages` below [`MIN_TEMPLATE_IMAGES`]; `Process` if an image
    /// cannot be loaded or the thumbnail cannot be written. Nothing is
    /// stored on failure.
    pub fn register<P: AsRef<Path>>(&self, name: &str, paths: &[P]) -> RegistryResult<Template> {
        if paths.len() < MIN_TEMPLATE_IMAGES {
            return Err(RegistryError::TooFewImages {
                required: MIN_TEMPLATE_IMAGES,
                provided: paths.len(),
            });
        }

        let id = self.repository.next_id();
        let profile = self.profiler.profile(id, paths)?;

        let template = Template {
            id,
            name: name.to_string(),
            image_count: paths.len(),
            thumbnail_url: format!("{}/{}", self.url_prefix, thumbnail_file_name(id)),
            style_data: profile.style,
            created_at: Utc::now(),
        };
        self.repository.insert(template.clone());

        tracing::info!(id, name, images = paths.len(), "Registered template");
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{PixelBuffer, Rgba};
    use crate::pipeline::test_support::write_png;
    use crate::DominantColor;
    use std::path::PathBuf;

    fn images(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let img = PixelBuffer::filled(6, 4, Rgba::opaque(32, 64, 96)).unwrap();
                write_png(dir, &format!("t{i}.png"), &img)
            })
            .collect()
    }

    fn registrar(dir: &Path) -> TemplateRegistrar<InMemoryTemplateRepository> {
        let config = PipelineConfig::default().with_output_dir(dir);
        TemplateRegistrar::new(InMemoryTemplateRepository::new(), &config)
    }

    #[test]
    fn test_register_stores_template() {
        let dir = tempfile::tempdir().unwrap();
        let registrar = registrar(dir.path());

        let template = registrar.register("Sketchbook", &images(dir.path(), 5)).unwrap();

        assert_eq!(template.name, "Sketchbook");
        assert_eq!(template.image_count, 5);
        assert_eq!(template.thumbnail_url, format!("/outputs/thumbnail-{}.jpg", template.id));
        assert_eq!(template.style_data.dominant_color, DominantColor::new(32, 64, 96));
        assert_eq!(template.style_data.color_count, 5 * 24);
        assert!(dir.path().join(thumbnail_file_name(template.id)).exists());

        assert_eq!(registrar.repository().get(template.id), Some(template));
    }

    #[test]
    fn test_register_requires_five_images() {
        let dir = tempfile::tempdir().unwrap();
        let registrar = registrar(dir.path());

        let result = registrar.register("Too small", &images(dir.path(), 4));
        assert!(matches!(
            result,
            Err(RegistryError::TooFewImages { required: 5, provided: 4 })
        ));
        assert!(registrar.repository().list().is_empty());
    }

    #[test]
    fn test_register_failure_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let registrar = registrar(dir.path());
        let mut paths = images(dir.path(), 4);
        paths.push(dir.path().join("missing.png"));

        let result = registrar.register("Broken", &paths);
        assert!(matches!(result, Err(RegistryError::Process(ProcessError::Io(_)))));
        assert!(registrar.repository().list().is_empty());
    }

    #[test]
    fn test_ids_are_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let registrar = registrar(dir.path());
        let paths = images(dir.path(), 5);

        let a = registrar.register("A", &paths).unwrap();
        let b = registrar.register("B", &paths).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(registrar.repository().list().len(), 2);
    }

    #[test]
    fn test_url_prefix_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PipelineConfig::default().with_output_dir(dir.path());
        config.output.url_prefix = "https://cdn.example.com/files/".to_string();
        let registrar = TemplateRegistrar::new(InMemoryTemplateRepository::new(), &config);

        let template = registrar.register("Remote", &images(dir.path(), 5)).unwrap();
        assert_eq!(
            template.thumbnail_url,
            format!("https://cdn.example.com/files/thumbnail-{}.jpg", template.id)
        );
    }

    #[test]
    fn test_template_serializes_camel_case() {
        let template = Template {
            id: 1,
            name: "Ink".to_string(),
            image_count: 5,
            thumbnail_url: "/outputs/thumbnail-1.jpg".to_string(),
            style_data: StyleProfile {
                dominant_color: DominantColor::new(1, 2, 3),
                color_count: 10,
            },
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["imageCount"], 5);
        assert_eq!(json["thumbnailUrl"], "/outputs/thumbnail-1.jpg");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["styleData"]["dominantColor"]["b"], 3);
        assert_eq!(json["styleData"]["colorCount"], 10);

        let back: Template = serde_json::from_value(json).unwrap();
        assert_eq!(back, template);
    }

    #[test]
    fn test_error_messages() {
        let err = RegistryError::TooFewImages { required: 5, provided: 2 };
        assert_eq!(err.to_string(), "A template needs at least 5 images, got 2");
        assert_eq!(RegistryError::NotFound(4).to_string(), "Template 4 not found");
        let err: RegistryError = ProcessError::EmptyInput.into();
        assert_eq!(err.to_string(), "No pixels to profile");
    }
}

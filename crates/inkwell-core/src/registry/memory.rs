//! Process-local template store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{RegistryError, RegistryResult, Template, TemplateRepository};

/// Templates held in memory for the lifetime of the process.
///
/// Ids start at 1 and are never reused, even after removal.
#[derive(Debug)]
pub struct InMemoryTemplateRepository {
    templates: RwLock<BTreeMap<u64, Template>>,
    next_id: AtomicU64,
}

impl Default for InMemoryTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self {
            templates: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // A panic while holding the lock cannot leave a half-written map
    // behind, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, Template>> {
        self.templates.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, Template>> {
        self.templates.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn insert(&self, template: Template) {
        self.write().insert(template.id, template);
    }

    fn get(&self, id: u64) -> Option<Template> {
        self.read().get(&id).cloned()
    }

    fn list(&self) -> Vec<Template> {
        self.read().values().cloned().collect()
    }

    fn rename(&self, id: u64, name: &str) -> RegistryResult<Template> {
        let mut templates = self.write();
        let template = templates.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        template.name = name.to_string();
        tracing::info!(id, name, "Renamed template");
        Ok(template.clone())
    }

    fn remove(&self, id: u64) -> RegistryResult<Template> {
        let removed = self.write().remove(&id).ok_or(RegistryError::NotFound(id))?;
        tracing::info!(id, "Removed template");
        Ok(removed)
    }
}

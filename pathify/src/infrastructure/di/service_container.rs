// pathify/src/infrastructure/di/service_container.rs
use crate::application::{RegistryService, RegistryServiceImpl};
use crate::config::Settings;
use crate::domain::error::DomainResult;
use crate::domain::list_kind::ListKind;
use crate::domain::matcher::FuzzyMatcher;
use crate::domain::repositories::line_store::LineStore;
use crate::infrastructure::matching::NucleoMatcher;
use crate::infrastructure::repositories::file_line_store::{ensure_directory, FileLineStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub storage_dir: PathBuf,
    pub registry_service: Arc<dyn RegistryService>,
    pub matcher: Arc<dyn FuzzyMatcher>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    #[instrument(level = "debug")]
    pub fn new(config: &Settings) -> Self {
        let storage_dir = config.storage_path();
        let general = Self::create_store(config, ListKind::General);
        let marked = Self::create_store(config, ListKind::Marked);
        debug!("Storage directory: {}", storage_dir.display());

        Self {
            storage_dir,
            registry_service: Arc::new(RegistryServiceImpl::new(general, marked)),
            matcher: Arc::new(NucleoMatcher::new()),
        }
    }

    fn create_store(config: &Settings, kind: ListKind) -> Arc<dyn LineStore> {
        Arc::new(FileLineStore::new(config.list_path(kind)))
    }

    /// Create the storage directory if needed; safe to call repeatedly.
    pub fn ensure_storage(&self) -> DomainResult<()> {
        ensure_directory(&self.storage_dir)
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("storage_dir", &self.storage_dir)
            .field("registry_service", &"Arc<dyn RegistryService>")
            .field("matcher", &"Arc<dyn FuzzyMatcher>")
            .finish()
    }
}

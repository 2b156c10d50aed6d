use std::sync::Arc;

use pylearn_core::Catalog;
use storage::repository::Storage;

use crate::assistant::AssistantService;
use crate::catalog_service::CatalogService;
use crate::config::AppConfig;
use crate::error::AppServicesError;
use crate::practice::PracticeService;
use crate::progress_service::ProgressService;
use crate::theme_service::ThemeService;

/// Assembles app-facing services over one storage backend and the catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
    practice: Arc<PracticeService>,
    theme: Arc<ThemeService>,
    assistant: Arc<AssistantService>,
}

impl AppServices {
    /// Build services from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the configuration is invalid or storage
    /// cannot be initialised.
    pub async fn from_env() -> Result<Self, AppServicesError> {
        let config = AppConfig::from_env()?;
        Self::new(&config).await
    }

    /// Build services for `config`: `SQLite` when a URL is set, memory otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// bundled catalog is invalid.
    pub async fn new(config: &AppConfig) -> Result<Self, AppServicesError> {
        let storage = match &config.db_url {
            Some(url) => Storage::sqlite(url).await?,
            None => {
                tracing::info!("no database configured; progress is kept in memory");
                Storage::in_memory()
            }
        };
        let catalog = Catalog::builtin()?;
        Ok(Self::with_storage(storage, catalog, config).await)
    }

    /// Build services over an existing storage backend and catalog.
    pub async fn with_storage(storage: Storage, catalog: Catalog, config: &AppConfig) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(ProgressService::load(Arc::clone(&storage.slots)).await);
        let theme = Arc::new(ThemeService::load(Arc::clone(&storage.slots)).await);
        let practice = Arc::new(PracticeService::new(
            Arc::clone(&catalog),
            Arc::clone(&progress),
        ));
        let assistant = Arc::new(AssistantService::new(config.assistant_delay));

        Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            progress,
            practice,
            theme,
            assistant,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }
}

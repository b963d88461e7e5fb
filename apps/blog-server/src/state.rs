//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::StoreError;
use blog_core::domain::Article;
use blog_core::ports::{ArticleRepository, DocumentStore};
use blog_infra::{DocumentArticleRepository, InMemoryStore, JsonFileStore};

use crate::config::StorageConfig;
use crate::views::{HtmlRenderer, PageRenderer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub views: Arc<dyn PageRenderer>,
}

impl AppState {
    /// Build the application state for the configured storage backend.
    pub async fn new(storage: &StorageConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn DocumentStore<Article>> = match storage {
            StorageConfig::Files(config) => Arc::new(JsonFileStore::<Article>::open(config).await?),
            StorageConfig::Memory => {
                tracing::warn!("STORAGE=memory - articles will not survive a restart");
                Arc::new(InMemoryStore::<Article>::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_store(store))
    }

    /// State over an already opened store, rendering with the built-in HTML views.
    pub fn with_store(store: Arc<dyn DocumentStore<Article>>) -> Self {
        Self {
            articles: Arc::new(DocumentArticleRepository::new(store)),
            views: Arc::new(HtmlRenderer),
        }
    }
}

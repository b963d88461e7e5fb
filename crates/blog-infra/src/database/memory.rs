//! In-memory document store - used by tests and when no data directory is wanted.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::StoreError;
use blog_core::ports::{Document, DocumentStore};

/// In-memory store keeping records in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Document> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

impl<T: Document> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for InMemoryStore<T> {
    async fn insert(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Duplicate(record.id().to_string()));
        }

        records.push(record.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<T, StoreError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        Ok(records.clone())
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, record.id()))?;

        *slot = record.clone();
        Ok(())
    }
}

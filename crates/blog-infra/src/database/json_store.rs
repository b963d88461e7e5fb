//! File-backed document store: one pretty-printed JSON file per record.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::StoreError;
use blog_core::ports::{Document, DocumentStore};

use super::config::StoreConfig;

/// Generic JSON document store.
///
/// Records of `T` live at `<data_dir>/<T::COLLECTION>/<id>.json`.
pub struct JsonFileStore<T> {
    dir: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Document> JsonFileStore<T> {
    /// Open the collection directory, creating it if needed.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let dir = config.data_dir.join(T::COLLECTION);
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!(path = %dir.display(), "Document store opened");

        Ok(Self {
            dir,
            _record: PhantomData,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file for `id`. Ids that could never have been generated are
    /// rejected so that nothing outside the collection directory is reachable.
    fn record_path(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        valid.then(|| self.dir.join(format!("{id}.json")))
    }

    /// Write to a temporary sibling and rename it over the record.
    async fn write_record(&self, path: &Path, record: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record)?;
        let tmp = path.with_extension(format!("json.{}.tmp", Uuid::new_v4()));

        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(collection = T::COLLECTION, id = record.id(), "Record written");
        Ok(())
    }

    async fn read_record(path: &Path, id: &str) -> Result<T, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::not_found(T::COLLECTION, id));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for JsonFileStore<T> {
    async fn insert(&self, record: &T) -> Result<(), StoreError> {
        let path = self
            .record_path(record.id())
            .ok_or_else(|| StoreError::Io(format!("invalid record id {:?}", record.id())))?;

        if tokio::fs::try_exists(&path).await? {
            return Err(StoreError::Duplicate(record.id().to_string()));
        }

        self.write_record(&path, record).await
    }

    async fn get(&self, id: &str) -> Result<T, StoreError> {
        let path = self
            .record_path(id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;

        Self::read_record(&path, id).await
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::Empty),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let bytes = tokio::fs::read(&path).await?;
            records.push(serde_json::from_slice(&bytes)?);
        }

        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        Ok(records)
    }

    async fn update(&self, record: &T) -> Result<(), StoreError> {
        let path = self
            .record_path(record.id())
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, record.id()))?;

        if !tokio::fs::try_exists(&path).await? {
            return Err(StoreError::not_found(T::COLLECTION, record.id()));
        }

        self.write_record(&path, record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::{Article, NewArticle, NewComment};

    async fn store(dir: &Path) -> JsonFileStore<Article> {
        JsonFileStore::open(&StoreConfig {
            data_dir: dir.to_path_buf(),
        })
        .await
        .unwrap()
    }

    fn article(title: &str) -> Article {
        Article::new(NewArticle {
            title: title.to_string(),
            author: "ada".to_string(),
            content: "body".to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let art = article("first");
        store.insert(&art).await.unwrap();

        assert!(store.dir().join(format!("{}.json", art.id)).exists());
        assert_eq!(store.get(&art.id).await.unwrap(), art);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let art = article("first");
        store.insert(&art).await.unwrap();

        let err = store.insert(&art).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_get_missing_and_traversal_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        for id in ["345", "", "../articles/x", "a/b"] {
            let err = store.get(id).await.unwrap_err();
            assert!(matches!(err, StoreError::NotFound { .. }), "id {id:?}");
        }
    }

    #[tokio::test]
    async fn test_get_all_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        assert!(matches!(store.get_all().await, Err(StoreError::Empty)));
    }

    #[tokio::test]
    async fn test_get_all_returns_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        store.insert(&article("a")).await.unwrap();
        store.insert(&article("b")).await.unwrap();

        let mut titles: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_update_rewrites_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let mut art = article("first");
        store.insert(&art).await.unwrap();

        art.append_comment(NewComment {
            name: "reader".to_string(),
            text: "hi".to_string(),
        });
        store.update(&art).await.unwrap();

        let stored = store.get(&art.id).await.unwrap();
        assert_eq!(stored.comments.len(), 1);
        assert_eq!(stored, art);
    }

    #[tokio::test]
    async fn test_tombstone_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let mut art = article("first");
        store.insert(&art).await.unwrap();

        let keep = art.append_comment(NewComment {
            name: "keep".to_string(),
            text: "stays".to_string(),
        });
        let gone = art.append_comment(NewComment {
            name: "gone".to_string(),
            text: "removed".to_string(),
        });
        assert!(art.soft_delete_comment(&gone.id, chrono::Utc::now()));
        store.update(&art).await.unwrap();

        let reopened: JsonFileStore<Article> = JsonFileStore::open(&StoreConfig {
            data_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap();
        let stored = reopened.get(&art.id).await.unwrap();

        assert_eq!(stored, art);
        assert_eq!(stored.comments[0], keep);
        assert!(!stored.comments[0].is_deleted());
        assert_eq!(stored.comments[1].deleted_at, art.comments[1].deleted_at);
        assert!(stored.comments[1].is_deleted());
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        let err = store.update(&article("ghost")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path()).await;

        std::fs::write(store.dir().join("broken.json"), b"{not json").unwrap();

        let err = store.get("broken").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}

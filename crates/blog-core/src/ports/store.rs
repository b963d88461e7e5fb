use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// A record kept whole in a document store, keyed by its identifier.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the collection the record lives in.
    const COLLECTION: &'static str;

    /// Primary key of the record.
    fn id(&self) -> &str;
}

/// Document store trait - whole-record persistence keyed by identifier.
///
/// Every write replaces the full record. There is no transaction spanning a
/// read and a later write, so concurrent updates to one record are last-write-wins.
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Store a new record. Fails with `Duplicate` if the id is taken.
    async fn insert(&self, record: &T) -> Result<(), StoreError>;

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> Result<T, StoreError>;

    /// Fetch every record. An empty collection is reported as `StoreError::Empty`.
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// Replace an existing record.
    async fn update(&self, record: &T) -> Result<(), StoreError>;
}

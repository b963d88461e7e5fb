use async_trait::async_trait;

use crate::domain::{Article, Comment, NewArticle, NewComment};
use crate::error::StoreError;

/// Article repository - the data-access operations the HTTP layer relies on.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Assign a fresh id, persist, and return the stored article.
    async fn create_article(&self, input: NewArticle) -> Result<Article, StoreError>;

    /// Find an article by id. Missing articles are `StoreError::NotFound`.
    async fn get_article(&self, id: &str) -> Result<Article, StoreError>;

    /// All articles, oldest first. An empty store yields an empty list.
    async fn get_all_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// Append a comment to `article` and persist the whole article.
    async fn add_comment(
        &self,
        article: &mut Article,
        input: NewComment,
    ) -> Result<Comment, StoreError>;

    /// Tombstone a comment and persist. Unknown comment ids are a no-op.
    async fn soft_delete_comment(
        &self,
        article: &mut Article,
        comment_id: &str,
    ) -> Result<(), StoreError>;
}

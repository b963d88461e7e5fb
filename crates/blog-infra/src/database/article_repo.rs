//! Article repository over a document store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use blog_core::StoreError;
use blog_core::domain::{Article, Comment, NewArticle, NewComment};
use blog_core::ports::{ArticleRepository, DocumentStore};

/// Article operations on top of any [`DocumentStore`] of articles.
///
/// Comment changes persist the caller's copy of the article as a whole, so two
/// requests changing the same article concurrently can overwrite each other.
pub struct DocumentArticleRepository {
    store: Arc<dyn DocumentStore<Article>>,
}

impl DocumentArticleRepository {
    pub fn new(store: Arc<dyn DocumentStore<Article>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArticleRepository for DocumentArticleRepository {
    async fn create_article(&self, input: NewArticle) -> Result<Article, StoreError> {
        let article = Article::new(input);
        self.store.insert(&article).await?;

        tracing::debug!(article_id = %article.id, "Article created");
        Ok(article)
    }

    async fn get_article(&self, id: &str) -> Result<Article, StoreError> {
        self.store.get(id).await
    }

    async fn get_all_articles(&self) -> Result<Vec<Article>, StoreError> {
        let mut articles = match self.store.get_all().await {
            Ok(articles) => articles,
            Err(StoreError::Empty) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        articles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(articles)
    }

    async fn add_comment(
        &self,
        article: &mut Article,
        input: NewComment,
    ) -> Result<Comment, StoreError> {
        let comment = article.append_comment(input);
        self.store.update(article).await?;

        tracing::debug!(article_id = %article.id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    async fn soft_delete_comment(
        &self,
        article: &mut Article,
        comment_id: &str,
    ) -> Result<(), StoreError> {
        if !article.soft_delete_comment(comment_id, Utc::now()) {
            tracing::debug!(article_id = %article.id, comment_id, "No comment to delete");
            return Ok(());
        }

        self.store.update(article).await?;

        tracing::debug!(article_id = %article.id, comment_id, "Comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::InMemoryStore;

    fn repo() -> (Arc<InMemoryStore<Article>>, DocumentArticleRepository) {
        let store: Arc<InMemoryStore<Article>> = Arc::new(InMemoryStore::new());
        let repo = DocumentArticleRepository::new(store.clone());
        (store, repo)
    }

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            author: "test".to_string(),
            content: "test".to_string(),
        }
    }

    fn new_comment(name: &str) -> NewComment {
        NewComment {
            name: name.to_string(),
            text: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let (_, repo) = repo();

        let a = repo.create_article(new_article("a")).await.unwrap();
        let b = repo.create_article(new_article("b")).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(repo.get_article(&a.id).await.unwrap(), a);
    }

    #[tokio::test]
    async fn test_get_all_on_empty_store_is_empty_list() {
        let (_, repo) = repo();
        assert!(repo.get_all_articles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_oldest_first() {
        let (_, repo) = repo();

        let first = repo.create_article(new_article("first")).await.unwrap();
        let second = repo.create_article(new_article("second")).await.unwrap();

        let ids: Vec<_> = repo
            .get_all_articles()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_get_missing_article() {
        let (_, repo) = repo();
        let err = repo.get_article("345").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_comment_persists_in_order() {
        let (_, repo) = repo();
        let mut art = repo.create_article(new_article("a")).await.unwrap();

        let one = repo.add_comment(&mut art, new_comment("one")).await.unwrap();
        let two = repo.add_comment(&mut art, new_comment("two")).await.unwrap();

        let stored = repo.get_article(&art.id).await.unwrap();
        let ids: Vec<_> = stored.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![one.id.as_str(), two.id.as_str()]);
    }

    #[tokio::test]
    async fn test_soft_delete_persists_tombstone() {
        let (_, repo) = repo();
        let mut art = repo.create_article(new_article("a")).await.unwrap();
        let keep = repo.add_comment(&mut art, new_comment("keep")).await.unwrap();
        let gone = repo.add_comment(&mut art, new_comment("gone")).await.unwrap();

        repo.soft_delete_comment(&mut art, &gone.id).await.unwrap();

        let stored = repo.get_article(&art.id).await.unwrap();
        assert_eq!(stored.comments.len(), 2);
        assert!(stored.comments[1].is_deleted());
        assert_eq!(stored.comments[0], keep);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_comment_is_noop() {
        let (_, repo) = repo();
        let mut art = repo.create_article(new_article("a")).await.unwrap();
        repo.add_comment(&mut art, new_comment("only")).await.unwrap();
        let before = repo.get_article(&art.id).await.unwrap();

        repo.soft_delete_comment(&mut art, "missing").await.unwrap();

        assert_eq!(repo.get_article(&art.id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_comment_to_unsaved_article_fails() {
        let (store, repo) = repo();
        let mut art = Article::new(new_article("never stored"));

        let err = repo.add_comment(&mut art, new_comment("x")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.len().await, 0);
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::article::Article;

/// Creation and deletion instants of one deleted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteEntry {
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl DeleteEntry {
    /// How long the comment was visible before it was deleted.
    pub fn lifetime(&self) -> Duration {
        self.deleted_at - self.created_at
    }
}

/// Deleted-comment aggregate shown on the index page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletionMetrics {
    pub data: Vec<DeleteEntry>,
}

impl DeletionMetrics {
    /// Scan every comment of every article, in order, for tombstones.
    pub fn collect(articles: &[Article]) -> Self {
        let data = articles
            .iter()
            .flat_map(|art| art.comments.iter())
            .filter_map(|c| {
                c.deleted_at.map(|deleted_at| DeleteEntry {
                    created_at: c.created_at,
                    deleted_at,
                })
            })
            .collect();

        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewArticle, NewComment};

    fn article_with(n: usize) -> Article {
        let mut art = Article::new(NewArticle::default());
        for i in 0..n {
            art.append_comment(NewComment {
                name: format!("n{i}"),
                text: format!("t{i}"),
            });
        }
        art
    }

    #[test]
    fn test_collects_only_deleted_comments() {
        let mut a = article_with(3);
        let mut b = article_with(2);
        let at = Utc::now();

        let a_id = a.comments[1].id.clone();
        let b_id = b.comments[0].id.clone();
        a.soft_delete_comment(&a_id, at);
        b.soft_delete_comment(&b_id, at);

        let metrics = DeletionMetrics::collect(&[a.clone(), b.clone()]);

        assert_eq!(metrics.data.len(), 2);
        assert_eq!(metrics.data[0].created_at, a.comments[1].created_at);
        assert_eq!(metrics.data[1].created_at, b.comments[0].created_at);
        assert!(metrics.data.iter().all(|e| e.deleted_at == at));
    }

    #[test]
    fn test_empty_when_nothing_deleted() {
        assert!(DeletionMetrics::collect(&[article_with(2)]).is_empty());
        assert!(DeletionMetrics::collect(&[]).is_empty());
    }

    #[test]
    fn test_lifetime() {
        let created_at = Utc::now();
        let entry = DeleteEntry {
            created_at,
            deleted_at: created_at + Duration::minutes(5),
        };
        assert_eq!(entry.lifetime(), Duration::minutes(5));
    }
}

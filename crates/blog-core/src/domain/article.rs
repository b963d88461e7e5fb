use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comment::{Comment, NewComment};
use crate::ports::Document;

/// Article entity - a blog post and its comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Display order is insertion order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Input for an article that has not been stored yet.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl Article {
    /// Create a new article with a generated id and no comments.
    pub fn new(input: NewArticle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            author: input.author,
            content: input.content,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Append a comment to the end of the thread and return a copy of it.
    pub fn append_comment(&mut self, input: NewComment) -> Comment {
        let comment = Comment::new(input, Utc::now());
        self.comments.push(comment.clone());
        comment
    }

    /// Tombstone the comment with `comment_id`.
    ///
    /// Returns `false` when no comment matches, leaving the article untouched.
    pub fn soft_delete_comment(&mut self, comment_id: &str, at: DateTime<Utc>) -> bool {
        match self.comments.iter_mut().find(|c| c.id == comment_id) {
            Some(comment) => {
                comment.mark_deleted(at);
                true
            }
            None => false,
        }
    }

    /// Comments that have not been deleted.
    pub fn live_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(|c| !c.is_deleted())
    }
}

impl Document for Article {
    const COLLECTION: &'static str = "articles";

    fn id(&self) -> &str {
        &self.id
    }
}

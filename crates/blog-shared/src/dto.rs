//! Data Transfer Objects - query strings and form bodies accepted by the routes.
//!
//! Missing fields decode as empty strings; lookups on an empty id then fail
//! the same way as any unknown id.

use serde::{Deserialize, Serialize};

/// `GET /article?id=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleQuery {
    pub id: String,
}

/// Form body of `POST /article`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// `POST /comment?article_id=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentQuery {
    pub article_id: String,
}

/// Form body of `POST /comment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub name: String,
    pub comment: String,
}

/// `DELETE /comment?article_id=...&id=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteCommentQuery {
    pub article_id: String,
    pub id: String,
}

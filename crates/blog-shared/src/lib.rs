//! # Blog Shared
//!
//! Query-string and form types exchanged between browser and server.

pub mod dto;

pub use dto::{ArticleForm, ArticleQuery, CommentForm, CommentQuery, DeleteCommentQuery};

//! Domain entities - the core business objects.

mod article;
mod comment;
mod metrics;

pub use article::{Article, NewArticle};
pub use comment::{Comment, NewComment};
pub use metrics::{DeleteEntry, DeletionMetrics};

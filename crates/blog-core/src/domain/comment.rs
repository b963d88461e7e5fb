use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - a reader's reply attached to an article.
///
/// Comments are never removed. Deletion sets `deleted_at` and the comment
/// stays in place as a tombstone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub name: String,
    #[serde(rename = "comment")]
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input for a comment that has not been attached to an article yet.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub name: String,
    pub text: String,
}

impl Comment {
    /// Create a live comment with a fresh id.
    pub fn new(input: NewComment, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            text: input.text,
            created_at,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Mark the comment deleted. An existing tombstone keeps its original time.
    pub(crate) fn mark_deleted(&mut self, at: DateTime<Utc>) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(at);
        }
    }
}

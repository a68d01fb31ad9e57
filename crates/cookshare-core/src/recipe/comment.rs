use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, UserId};

use super::InteractionError;

/// A comment on a published recipe.
///
/// Comments are immutable once created and append-only per recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment with a fresh id.
    ///
    /// Fails with [`InteractionError::EmptyContent`] when the content is
    /// blank after trimming.
    pub fn new(
        author: UserId,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, InteractionError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(InteractionError::EmptyContent);
        }
        Ok(Self {
            id: CommentId::new(),
            author,
            content: content.to_string(),
            created_at: now,
        })
    }
}

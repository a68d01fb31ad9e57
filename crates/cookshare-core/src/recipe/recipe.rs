use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{RecipeId, UserId};

use super::{Comment, Ingredient, InteractionError, MediaHandle, Step};

/// A published, shareable recipe.
///
/// Invariant: `likes == liked_by.len()` and `favorites == favorited_by.len()`
/// at all times, and a user id appears at most once per set. All social
/// mutation therefore goes through [`Recipe::register_like`],
/// [`Recipe::register_favorite`] and [`Recipe::push_comment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub author: UserId,
    pub title: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<MediaHandle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_video: Option<MediaHandle>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<Step>,

    /// Display-only style tag (e.g. "家常菜")
    #[serde(default)]
    pub style: String,

    /// Display-only cooking duration (e.g. "30分钟")
    #[serde(default)]
    pub duration: String,

    /// Reserved view counter; never incremented by any current operation
    #[serde(default)]
    pub views: u64,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub favorites: u64,

    #[serde(default)]
    pub liked_by: BTreeSet<UserId>,

    #[serde(default)]
    pub favorited_by: BTreeSet<UserId>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Recipe {
    /// Materialize a fresh recipe with zeroed social state.
    pub fn new(
        author: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecipeId::new(),
            author,
            title: title.into(),
            description: description.into(),
            cover_image: None,
            cooking_video: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            style: String::new(),
            duration: String::new(),
            views: 0,
            created_at,
            likes: 0,
            favorites: 0,
            liked_by: BTreeSet::new(),
            favorited_by: BTreeSet::new(),
            comments: Vec::new(),
        }
    }

    pub fn has_liked(&self, user: &UserId) -> bool {
        self.liked_by.contains(user)
    }

    pub fn has_favorited(&self, user: &UserId) -> bool {
        self.favorited_by.contains(user)
    }

    /// Record a like for `user`.
    ///
    /// Idempotent per user: a second call with the same user fails with
    /// [`InteractionError::AlreadyLiked`] and changes nothing.
    pub fn register_like(&mut self, user: &UserId) -> Result<(), InteractionError> {
        if !self.liked_by.insert(user.clone()) {
            return Err(InteractionError::AlreadyLiked);
        }
        self.likes = self.liked_by.len() as u64;
        Ok(())
    }

    /// Record a favorite for `user`; symmetric to [`Recipe::register_like`].
    pub fn register_favorite(&mut self, user: &UserId) -> Result<(), InteractionError> {
        if !self.favorited_by.insert(user.clone()) {
            return Err(InteractionError::AlreadyFavorited);
        }
        self.favorites = self.favorited_by.len() as u64;
        Ok(())
    }

    /// Append a comment. Comments are never removed or edited.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Check the counter/set invariant; used by tests and the store's
    /// corrupt-data screening.
    pub fn social_counts_consistent(&self) -> bool {
        self.likes == self.liked_by.len() as u64 && self.favorites == self.favorited_by.len() as u64
    }
}

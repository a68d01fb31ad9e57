//! Currently selected recipe.
//!
//! The selection is a local mirror of one store entry, shared between
//! the interaction engine (which refreshes it after every mutation so UI
//! state and stored state never diverge) and the playback controller
//! (which tears playback down when it changes).

use std::sync::Arc;

use tokio::sync::Mutex;

use cookshare_core::{Recipe, RecipeId};

/// Shared handle to the currently selected recipe, if any.
#[derive(Clone, Default)]
pub struct Selection {
    current: Arc<Mutex<Option<Recipe>>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<Recipe> {
        self.current.lock().await.clone()
    }

    pub async fn current_id(&self) -> Option<RecipeId> {
        self.current.lock().await.as_ref().map(|r| r.id.clone())
    }

    pub async fn set(&self, recipe: Recipe) {
        *self.current.lock().await = Some(recipe);
    }

    pub async fn clear(&self) {
        *self.current.lock().await = None;
    }

    /// Refresh the mirror if it currently points at `recipe`.
    pub async fn refresh_if_selected(&self, recipe: &Recipe) {
        let mut current = self.current.lock().await;
        if current.as_ref().is_some_and(|r| r.id == recipe.id) {
            *current = Some(recipe.clone());
        }
    }

    /// Clear the mirror if it currently points at `id`; returns whether
    /// it did.
    pub async fn clear_if_selected(&self, id: &RecipeId) -> bool {
        let mut current = self.current.lock().await;
        if current.as_ref().is_some_and(|r| &r.id == id) {
            *current = None;
            true
        } else {
            false
        }
    }
}

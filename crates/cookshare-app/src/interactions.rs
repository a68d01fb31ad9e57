//! Interaction engine: per-user idempotent likes/favorites, comment
//! append, and confirmed recipe deletion.
//!
//! Every operation recomputes its idempotency guard from the freshly
//! loaded slot contents (via [`RecipeStore::try_mutate`]), so repeated
//! calls and cross-reload discrepancies resolve against what is actually
//! persisted, not a stale in-memory copy.

use std::sync::Arc;

use tracing::info;

use cookshare_core::ports::ClockPort;
use cookshare_core::{Comment, InteractionError, Recipe, RecipeId, UserId};

use crate::selection::Selection;
use crate::store::RecipeStore;

/// Social interaction service over the recipe store.
pub struct Interactions {
    store: Arc<RecipeStore>,
    clock: Arc<dyn ClockPort>,
    selection: Selection,
}

impl Interactions {
    pub fn new(store: Arc<RecipeStore>, clock: Arc<dyn ClockPort>, selection: Selection) -> Self {
        Self {
            store,
            clock,
            selection,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open a recipe: load fresh and mirror it as the current selection.
    #[tracing::instrument(name = "interactions.select", skip(self), fields(recipe_id = %id))]
    pub async fn select(&self, id: &RecipeId) -> Result<Recipe, InteractionError> {
        let recipes = self.store.load().await;
        let recipe = recipes
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| InteractionError::RecipeNotFound {
                id: id.to_string(),
            })?;
        self.selection.set(recipe.clone()).await;
        Ok(recipe)
    }

    pub async fn clear_selection(&self) {
        self.selection.clear().await;
    }

    /// Like a recipe on behalf of `user`. Fails with `AlreadyLiked` on a
    /// repeat, leaving stored state untouched.
    #[tracing::instrument(name = "interactions.like", skip(self), fields(recipe_id = %id, user = %user))]
    pub async fn like(&self, id: &RecipeId, user: &UserId) -> Result<(), InteractionError> {
        let recipe = self
            .mutate_recipe(id, |recipe| recipe.register_like(user))
            .await?;
        self.selection.refresh_if_selected(&recipe).await;
        info!(likes = recipe.likes, "recipe liked");
        Ok(())
    }

    /// Favorite a recipe on behalf of `user`; symmetric to [`Interactions::like`].
    #[tracing::instrument(name = "interactions.favorite", skip(self), fields(recipe_id = %id, user = %user))]
    pub async fn favorite(&self, id: &RecipeId, user: &UserId) -> Result<(), InteractionError> {
        let recipe = self
            .mutate_recipe(id, |recipe| recipe.register_favorite(user))
            .await?;
        self.selection.refresh_if_selected(&recipe).await;
        info!(favorites = recipe.favorites, "recipe favorited");
        Ok(())
    }

    /// Append a comment. Fails with `EmptyContent` when the trimmed
    /// content is blank.
    #[tracing::instrument(name = "interactions.comment", skip(self, content), fields(recipe_id = %id, user = %user))]
    pub async fn comment(
        &self,
        id: &RecipeId,
        content: &str,
        user: &UserId,
    ) -> Result<Comment, InteractionError> {
        let comment = Comment::new(user.clone(), content, self.clock.now())?;
        let appended = comment.clone();
        let recipe = self
            .mutate_recipe(id, move |recipe| {
                recipe.push_comment(appended);
                Ok(())
            })
            .await?;
        self.selection.refresh_if_selected(&recipe).await;
        info!(comments = recipe.comments.len(), "comment appended");
        Ok(comment)
    }

    /// Delete a recipe after explicit confirmation.
    ///
    /// Unconfirmed calls are refused; an unknown id is a no-op. When the
    /// deleted recipe was selected, the selection is cleared so nothing
    /// dangles.
    #[tracing::instrument(name = "interactions.delete_recipe", skip(self), fields(recipe_id = %id))]
    pub async fn delete_recipe(
        &self,
        id: &RecipeId,
        confirmed: bool,
    ) -> Result<(), InteractionError> {
        if !confirmed {
            return Err(InteractionError::DeletionNotConfirmed);
        }
        let removed = self.store.remove(id).await?;
        let cleared = self.selection.clear_if_selected(id).await;
        info!(removed, selection_cleared = cleared, "recipe deletion handled");
        Ok(())
    }

    /// Shared read-modify-write: apply `op` to the recipe with `id` on
    /// top of the freshly loaded collection; persist only on success.
    async fn mutate_recipe(
        &self,
        id: &RecipeId,
        op: impl FnOnce(&mut Recipe) -> Result<(), InteractionError>,
    ) -> Result<Recipe, InteractionError> {
        let outcome = self
            .store
            .try_mutate(|recipes| {
                let recipe = recipes.iter_mut().find(|r| &r.id == id).ok_or_else(|| {
                    InteractionError::RecipeNotFound {
                        id: id.to_string(),
                    }
                })?;
                op(recipe)?;
                Ok(recipe.clone())
            })
            .await
            .map_err(InteractionError::Storage)?;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use cookshare_core::ports::RecipeSlotPort;
    use cookshare_core::recipe::sample_recipes;

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        }
    }

    struct MemorySlot(std::sync::Mutex<Option<String>>);

    #[async_trait]
    impl RecipeSlotPort for MemorySlot {
        async fn load(&self) -> Result<Option<String>> {
            Ok(self.0.lock().unwrap().clone())
        }

        async fn store(&self, raw: &str) -> Result<()> {
            *self.0.lock().unwrap() = Some(raw.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.0.lock().unwrap() = None;
            Ok(())
        }
    }

    async fn seeded() -> (Arc<RecipeStore>, Interactions, RecipeId) {
        let store = Arc::new(RecipeStore::new(Arc::new(MemorySlot(
            std::sync::Mutex::new(None),
        ))));
        let recipes = sample_recipes(FixedClock.now());
        let first_id = recipes[0].id.clone();
        store.save(recipes).await.unwrap();

        let interactions =
            Interactions::new(Arc::clone(&store), Arc::new(FixedClock), Selection::new());
        (store, interactions, first_id)
    }

    #[tokio::test]
    async fn like_increments_once_then_fails_idempotently() {
        let (store, interactions, id) = seeded().await;
        let user = "u1".into();

        interactions.like(&id, &user).await.unwrap();
        let err = interactions.like(&id, &user).await.unwrap_err();
        assert!(matches!(err, InteractionError::AlreadyLiked));

        let recipe = store
            .load()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .unwrap();
        assert_eq!(recipe.likes, 1);
        assert!(recipe.social_counts_consistent());
    }

    #[tokio::test]
    async fn favorite_is_tracked_separately_from_like() {
        let (store, interactions, id) = seeded().await;
        let user = "u1".into();

        interactions.like(&id, &user).await.unwrap();
        interactions.favorite(&id, &user).await.unwrap();
        let err = interactions.favorite(&id, &user).await.unwrap_err();
        assert!(matches!(err, InteractionError::AlreadyFavorited));

        let recipe = store
            .load()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .unwrap();
        assert_eq!(recipe.likes, 1);
        assert_eq!(recipe.favorites, 1);
    }

    #[tokio::test]
    async fn like_refreshes_the_selection_mirror() {
        let (_store, interactions, id) = seeded().await;
        interactions.select(&id).await.unwrap();

        interactions.like(&id, &"u1".into()).await.unwrap();

        let selected = interactions.selection().current().await.unwrap();
        assert_eq!(selected.likes, 1);
    }

    #[tokio::test]
    async fn comment_appends_with_fresh_id_and_timestamp() {
        let (store, interactions, id) = seeded().await;

        let comment = interactions
            .comment(&id, "  looks great  ", &"u2".into())
            .await
            .unwrap();
        assert_eq!(comment.content, "looks great");
        assert_eq!(comment.created_at, FixedClock.now());

        let recipe = store
            .load()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .unwrap();
        assert_eq!(recipe.comments.len(), 1);
        assert_eq!(recipe.comments[0].id, comment.id);
    }

    #[tokio::test]
    async fn empty_comment_is_rejected_without_touching_the_store() {
        let (store, interactions, id) = seeded().await;

        let err = interactions
            .comment(&id, "   ", &"u2".into())
            .await
            .unwrap_err();
        assert!(matches!(err, InteractionError::EmptyContent));

        let recipe = store
            .load()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .unwrap();
        assert!(recipe.comments.is_empty());
    }

    #[tokio::test]
    async fn unknown_recipe_is_reported() {
        let (_store, interactions, _id) = seeded().await;
        let err = interactions
            .like(&"ghost".into(), &"u1".into())
            .await
            .unwrap_err();
        assert!(matches!(err, InteractionError::RecipeNotFound { .. }));
    }

    #[tokio::test]
    async fn unconfirmed_deletion_is_refused() {
        let (store, interactions, id) = seeded().await;

        let err = interactions.delete_recipe(&id, false).await.unwrap_err();
        assert!(matches!(err, InteractionError::DeletionNotConfirmed));
        assert!(store.load().await.iter().any(|r| r.id == id));
    }

    #[tokio::test]
    async fn deleting_the_selected_recipe_clears_the_selection() {
        let (store, interactions, id) = seeded().await;
        interactions.select(&id).await.unwrap();

        interactions.delete_recipe(&id, true).await.unwrap();

        assert!(interactions.selection().current().await.is_none());
        assert!(store.load().await.iter().all(|r| r.id != id));
    }

    #[tokio::test]
    async fn deleting_an_absent_recipe_is_a_no_op() {
        let (store, interactions, _id) = seeded().await;
        let before = store.load().await;

        interactions
            .delete_recipe(&"ghost".into(), true)
            .await
            .unwrap();
        assert_eq!(store.load().await, before);
    }

    #[tokio::test]
    async fn deleting_an_unselected_recipe_keeps_the_selection() {
        let (store, interactions, id) = seeded().await;
        let other = store
            .load()
            .await
            .into_iter()
            .find(|r| r.id != id)
            .unwrap();
        interactions.select(&id).await.unwrap();

        interactions.delete_recipe(&other.id, true).await.unwrap();

        assert_eq!(
            interactions.selection().current_id().await,
            Some(id)
        );
    }

    #[tokio::test]
    async fn scenario_publish_like_comment() {
        // End-to-end rules check mirroring the demo flow: share a new
        // recipe, like it twice from one user, comment from another.
        let store = Arc::new(RecipeStore::new(Arc::new(MemorySlot(
            std::sync::Mutex::new(None),
        ))));
        let interactions =
            Interactions::new(Arc::clone(&store), Arc::new(FixedClock), Selection::new());

        let mut session = cookshare_core::CompositionSession::new();
        session.set_title("Tomato Egg");
        session.set_description("Sweet and sour");
        session.add_ingredient();
        session.add_ingredient();
        for i in 0..3 {
            session.add_step();
            session.update_step(i, format!("step {i}")).unwrap();
        }
        session.publish().unwrap();
        let recipe = session.share("u1".into(), FixedClock.now()).unwrap();
        let id = recipe.id.clone();
        store.append(recipe).await.unwrap();

        assert_eq!(store.load().await.len(), 1);
        assert_eq!(store.load().await[0].steps.len(), 3);

        interactions.like(&id, &"u1".into()).await.unwrap();
        let err = interactions.like(&id, &"u1".into()).await.unwrap_err();
        assert!(matches!(err, InteractionError::AlreadyLiked));

        interactions
            .comment(&id, "looks great", &"u2".into())
            .await
            .unwrap();

        let recipe = store.load().await.remove(0);
        assert_eq!(recipe.likes, 1);
        assert_eq!(recipe.comments.len(), 1);
    }
}

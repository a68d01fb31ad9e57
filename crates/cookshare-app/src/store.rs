//! Recipe store: the single authoritative collection of published
//! recipes, persisted wholesale on every mutation.
//!
//! Every mutation is read-whole → transform → write-whole against the
//! freshly loaded slot contents, never against a stale in-memory copy,
//! and the whole read-modify-write happens under one guard so no other
//! event can interleave and observe inconsistent state. The store also
//! keeps an in-memory mirror for feed rendering and the stats
//! projection.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use cookshare_core::ports::RecipeSlotPort;
use cookshare_core::{Recipe, RecipeId};

/// Version tag written into the slot envelope. An unknown version is
/// treated like corrupt data: fail soft, start empty.
const SLOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SlotEnvelope {
    version: u32,
    recipes: Vec<Recipe>,
}

/// Errors detected while decoding the persisted collection.
///
/// Never propagated to callers: the store recovers locally by treating
/// the slot as empty and logging a warning.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("persisted recipe data is corrupt: {reason}")]
    Corrupt { reason: String },
}

/// Authoritative recipe collection over a persistence slot.
pub struct RecipeStore {
    slot: Arc<dyn RecipeSlotPort>,
    mirror: Mutex<Vec<Recipe>>,
}

impl RecipeStore {
    pub fn new(slot: Arc<dyn RecipeSlotPort>) -> Self {
        Self {
            slot,
            mirror: Mutex::new(Vec::new()),
        }
    }

    /// Read the persisted collection, refreshing the mirror.
    ///
    /// Fails soft: an absent slot, unreadable backend or corrupt payload
    /// all yield an empty collection (with a warning), never an error.
    pub async fn load(&self) -> Vec<Recipe> {
        let mut mirror = self.mirror.lock().await;
        let recipes = self.read_slot().await;
        *mirror = recipes.clone();
        recipes
    }

    /// Replace the whole collection.
    pub async fn save(&self, recipes: Vec<Recipe>) -> Result<()> {
        let mut mirror = self.mirror.lock().await;
        self.write_slot(&recipes).await?;
        *mirror = recipes;
        Ok(())
    }

    /// Current mirror contents, as last loaded or written.
    pub async fn snapshot(&self) -> Vec<Recipe> {
        self.mirror.lock().await.clone()
    }

    /// Append one recipe.
    pub async fn append(&self, recipe: Recipe) -> Result<()> {
        self.mutate(move |recipes| recipes.push(recipe)).await
    }

    /// Edit the recipe with `id` in place; no-op (returns `false`)
    /// when the id is unknown, without rewriting the slot.
    pub async fn update(
        &self,
        id: &RecipeId,
        edit: impl FnOnce(&mut Recipe),
    ) -> Result<bool> {
        let outcome = self
            .try_mutate(|recipes| match recipes.iter_mut().find(|r| &r.id == id) {
                Some(recipe) => {
                    edit(recipe);
                    Ok(true)
                }
                None => Err(()),
            })
            .await?;
        Ok(outcome.unwrap_or(false))
    }

    /// Remove the recipe with `id`; no-op (returns `false`) when absent.
    pub async fn remove(&self, id: &RecipeId) -> Result<bool> {
        let outcome = self
            .try_mutate(|recipes| {
                let before = recipes.len();
                recipes.retain(|r| &r.id != id);
                if recipes.len() == before {
                    Err(())
                } else {
                    Ok(true)
                }
            })
            .await?;
        Ok(outcome.unwrap_or(false))
    }

    /// Read-whole → transform → write-whole under one guard.
    ///
    /// The closure sees the freshly loaded collection. On `Ok` the
    /// transformed collection is persisted and mirrored; on `Err` the
    /// slot is left untouched (failed interactions must not alter stored
    /// state), the mirror keeps the as-loaded collection even when the
    /// closure mutated before failing, and the error is handed back to
    /// the caller.
    pub async fn try_mutate<T, E>(
        &self,
        f: impl FnOnce(&mut Vec<Recipe>) -> Result<T, E>,
    ) -> Result<Result<T, E>> {
        let mut mirror = self.mirror.lock().await;
        let loaded = self.read_slot().await;
        let mut recipes = loaded.clone();
        match f(&mut recipes) {
            Ok(value) => {
                self.write_slot(&recipes).await?;
                *mirror = recipes;
                Ok(Ok(value))
            }
            Err(rejected) => {
                *mirror = loaded;
                Ok(Err(rejected))
            }
        }
    }

    /// Infallible-transform variant of [`RecipeStore::try_mutate`].
    pub async fn mutate<T>(&self, f: impl FnOnce(&mut Vec<Recipe>) -> T) -> Result<T> {
        let outcome = self
            .try_mutate::<T, std::convert::Infallible>(|recipes| Ok(f(recipes)))
            .await?;
        match outcome {
            Ok(value) => Ok(value),
            Err(never) => match never {},
        }
    }

    async fn read_slot(&self) -> Vec<Recipe> {
        let raw = match self.slot.load().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "recipe slot unreadable, starting empty");
                return Vec::new();
            }
        };
        let Some(raw) = raw else {
            return Vec::new();
        };
        match Self::decode(&raw) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(error = %e, "recipe slot corrupt, starting empty");
                Vec::new()
            }
        }
    }

    async fn write_slot(&self, recipes: &[Recipe]) -> Result<()> {
        let envelope = SlotEnvelope {
            version: SLOT_SCHEMA_VERSION,
            recipes: recipes.to_vec(),
        };
        let raw = serde_json::to_string(&envelope)?;
        self.slot.store(&raw).await
    }

    fn decode(raw: &str) -> Result<Vec<Recipe>, StoreError> {
        let envelope: SlotEnvelope =
            serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
                reason: e.to_string(),
            })?;
        if envelope.version != SLOT_SCHEMA_VERSION {
            return Err(StoreError::Corrupt {
                reason: format!("unknown slot schema version {}", envelope.version),
            });
        }
        let mut recipes = envelope.recipes;
        for recipe in &mut recipes {
            if !recipe.social_counts_consistent() {
                // Repair rather than discard: the sets are authoritative.
                warn!(id = %recipe.id, "social counters out of sync with sets, repairing");
                recipe.likes = recipe.liked_by.len() as u64;
                recipe.favorites = recipe.favorited_by.len() as u64;
            }
        }
        Ok(recipes)
    }
}

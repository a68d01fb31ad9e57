use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use cookshare_core::ports::RecipeSlotPort;

/// Filesystem implementation of the recipe slot: one JSON file holding
/// the whole serialized collection.
///
/// Writes go to a sibling tmp file first and are moved into place with
/// an atomic rename, so a crash mid-write never leaves a half-written
/// slot behind.
pub struct JsonRecipeSlotStore {
    path: PathBuf,
}

impl JsonRecipeSlotStore {
    /// Slot at `<data_dir>/recipes.json`. The directory must exist.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join("recipes.json"),
        }
    }

    /// Slot at the platform app-data directory, creating it if needed.
    pub async fn at_default_location() -> Result<Self> {
        let dir = super::app_data_dir()?;
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self::new(dir))
    }
}

#[async_trait]
impl RecipeSlotPort for JsonRecipeSlotStore {
    async fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        Ok(Some(raw))
    }

    async fn store(&self, raw: &str) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, raw)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;

        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to move slot into {}", self.path.display()))?;

        debug!(path = %self.path.display(), bytes = raw.len(), "recipe slot written");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path)
                .await
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

use anyhow::Result;
use async_trait::async_trait;

/// Persistence slot port - abstracts the single named slot holding the
/// serialized recipe collection.
///
/// The contract is deliberately dumb: one slot, read returns the whole
/// serialized payload or `None`, write replaces it wholesale (last
/// writer wins, no merge). Schema interpretation (envelope version,
/// corrupt-data recovery) is the recipe store's job, so implementations
/// can be a file, a browser localStorage shim, or an in-memory map
/// without caring about the payload.
#[async_trait]
pub trait RecipeSlotPort: Send + Sync {
    /// Read the raw slot contents; `None` when nothing was ever saved.
    async fn load(&self) -> Result<Option<String>>;

    /// Replace the slot contents wholesale.
    async fn store(&self, raw: &str) -> Result<()>;

    /// Remove the slot entirely.
    async fn clear(&self) -> Result<()>;
}

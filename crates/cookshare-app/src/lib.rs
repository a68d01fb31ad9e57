//! # cookshare-app
//!
//! Use-case layer for CookShare. Services here orchestrate the pure
//! domain logic from `cookshare-core` over the port implementations the
//! caller injects: the recipe store on top of the persistence slot, the
//! interaction engine, the user-stats projection, and the playback
//! controller that executes the state machines' actions against real
//! timers and the narration device.

pub mod interactions;
pub mod playback;
pub mod selection;
pub mod stats;
pub mod store;

pub use interactions::Interactions;
pub use playback::{PlaybackController, PlaybackView};
pub use selection::Selection;
pub use stats::StatsService;
pub use store::{RecipeStore, StoreError};

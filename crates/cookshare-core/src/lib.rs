//! # cookshare-core
//!
//! Core domain models and business logic for CookShare.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies. External collaborators (the persistence slot, the
//! narration device, the wall clock) are expressed as port traits in
//! [`ports`] and implemented elsewhere.

// Public module exports
pub mod composition;
pub mod config;
pub mod ids;
pub mod playback;
pub mod ports;
pub mod recipe;

// Re-export commonly used types at the crate root
pub use composition::{CompositionError, CompositionSession, DraftPhase};
pub use config::{GenerationConfig, NarrationConfig, PlaybackConfig};
pub use ids::{CommentId, RecipeId, UserId};
pub use playback::{
    GenerationMachine, NarrationRequest, NarrationToken, PlaybackAction, PlaybackEvent,
    PlaybackMachine, PlaybackState,
};
pub use recipe::{
    Comment, FollowSeed, Ingredient, InteractionError, MediaError, MediaHandle, Recipe, Step,
    Unit, UserProfile, UserStats,
};

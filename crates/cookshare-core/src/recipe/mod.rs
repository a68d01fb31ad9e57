//! Recipe domain models.
//!
//! The central entity is [`Recipe`]; its social state (likes, favorites,
//! comments) is only mutated through methods that keep the counters and
//! the per-user sets consistent.

mod comment;
mod error;
mod ingredient;
mod media;
#[allow(clippy::module_inception)]
mod recipe;
mod seed;
mod stats;
mod step;


pub use comment::Comment;
pub use error::InteractionError;
pub use ingredient::{Ingredient, Unit};
pub use media::{MediaError, MediaHandle};
pub use recipe::Recipe;
pub use seed::{sample_recipes, seed_profiles};
pub use stats::{FollowSeed, UserProfile, UserStats};
pub use step::Step;

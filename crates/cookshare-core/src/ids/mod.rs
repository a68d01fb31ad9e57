//! ID type wrappers for type safety.

mod id_macro;
pub mod user_id;

pub use user_id::UserId;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Unique identifier of a published recipe (UUID v4, assigned at share time).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(String);

/// Unique identifier of a comment (UUID v4, assigned on creation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(String);

impl_id!(RecipeId, CommentId);

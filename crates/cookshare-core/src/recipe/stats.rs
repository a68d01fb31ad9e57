use serde::{Deserialize, Serialize};

use crate::ids::UserId;

use super::Recipe;

/// A known user of the demo community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Externally seeded follower/following counts for a user.
///
/// The community is a single-session demo, so these numbers come from
/// fixture data rather than a real social graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FollowSeed {
    pub followers: u64,
    pub following: u64,
}

/// Per-user aggregate over the recipe collection.
///
/// This is a projection, never a second source of truth: it must be
/// recomputed from the store whenever the collection changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub user: UserId,
    pub followers: u64,
    pub following: u64,
    /// Recipes authored by this user, in collection order
    pub recipes: Vec<Recipe>,
}

impl UserStats {
    /// Recompute the projection for `user` over the given collection.
    pub fn project(user: UserId, seed: FollowSeed, recipes: &[Recipe]) -> Self {
        let recipes = recipes
            .iter()
            .filter(|r| r.author == user)
            .cloned()
            .collect();
        Self {
            user,
            followers: seed.followers,
            following: seed.following,
            recipes,
        }
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

//! User stats projection.
//!
//! Aggregates the follower/following seed numbers with the subset of the
//! recipe collection authored by a user. Always recomputed from a fresh
//! store read; the projection is never a second source of truth.

use std::collections::HashMap;
use std::sync::Arc;

use cookshare_core::recipe::seed_profiles;
use cookshare_core::{FollowSeed, UserId, UserProfile, UserStats};

use crate::store::RecipeStore;

/// Stats service over the recipe store and a seeded social graph.
pub struct StatsService {
    store: Arc<RecipeStore>,
    profiles: Vec<UserProfile>,
    seeds: HashMap<UserId, FollowSeed>,
}

impl StatsService {
    pub fn new(store: Arc<RecipeStore>, seeds: HashMap<UserId, FollowSeed>) -> Self {
        Self {
            store,
            profiles: seed_profiles(),
            seeds,
        }
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn profile(&self, user: &UserId) -> Option<&UserProfile> {
        self.profiles.iter().find(|p| &p.id == user)
    }

    /// Recompute the projection for `user` from a fresh store read.
    pub async fn user_stats(&self, user: &UserId) -> UserStats {
        let recipes = self.store.load().await;
        let seed = self.seeds.get(user).copied().unwrap_or_default();
        UserStats::project(user.clone(), seed, &recipes)
    }
}

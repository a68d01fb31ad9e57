//! Composition session: the transient draft of a recipe being authored.
//!
//! A session accumulates form edits (title, description, media,
//! ingredient and step lists) before anything becomes durable. The phase
//! sequence is `Drafting -> Published`, and [`CompositionSession::share`]
//! materializes the draft into a canonical [`Recipe`] while resetting the
//! session back to a fresh draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::recipe::{Ingredient, MediaError, MediaHandle, Recipe, Step};

/// Errors raised while editing or publishing a draft.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    /// Title is blank after trimming
    #[error("recipe title must not be empty")]
    MissingTitle,

    /// Description is blank after trimming
    #[error("recipe description must not be empty")]
    MissingDescription,

    /// `share` called before a successful `publish`
    #[error("draft has not been published yet")]
    NotPublished,

    /// Indexed edit outside the current list bounds
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Attached media failed MIME-category validation
    #[error(transparent)]
    Media(#[from] MediaError),
}

/// Phase of the draft lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPhase {
    /// Fields are being edited; nothing validated yet
    #[default]
    Drafting,

    /// Validation passed; the draft is ready to be shared
    Published,
}

/// In-progress, unpublished recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompositionSession {
    phase: DraftPhase,
    title: String,
    description: String,
    cover_image: Option<MediaHandle>,
    cooking_video: Option<MediaHandle>,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
    style: String,
    duration: String,
}

impl CompositionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn cover_image(&self) -> Option<&MediaHandle> {
        self.cover_image.as_ref()
    }

    pub fn cooking_video(&self) -> Option<&MediaHandle> {
        self.cooking_video.as_ref()
    }

    // === Field edits ===

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = style.into();
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.duration = duration.into();
    }

    // === List edits ===

    /// Append a blank ingredient row.
    pub fn add_ingredient(&mut self) -> usize {
        self.ingredients.push(Ingredient::default());
        self.ingredients.len() - 1
    }

    /// Edit the ingredient at `index` in place.
    ///
    /// Out-of-bounds indices fail with [`CompositionError::IndexOutOfRange`]
    /// and leave the list untouched; an edit must never land at the wrong
    /// position.
    pub fn update_ingredient(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut Ingredient),
    ) -> Result<(), CompositionError> {
        let len = self.ingredients.len();
        let ingredient = self
            .ingredients
            .get_mut(index)
            .ok_or(CompositionError::IndexOutOfRange { index, len })?;
        edit(ingredient);
        Ok(())
    }

    /// Append a blank step.
    pub fn add_step(&mut self) -> usize {
        self.steps.push(Step::default());
        self.steps.len() - 1
    }

    /// Edit the step description at `index` in place.
    pub fn update_step(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> Result<(), CompositionError> {
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(index)
            .ok_or(CompositionError::IndexOutOfRange { index, len })?;
        step.description = description.into();
        Ok(())
    }

    // === Media attach ===
    //
    // The file read happens outside the core; by the time these are
    // called the caller holds the declared MIME type and the opaque
    // handle. MIME-category validation happens here.

    pub fn attach_cover_image(
        &mut self,
        mime: &str,
        handle: impl Into<String>,
    ) -> Result<(), CompositionError> {
        self.cover_image = Some(MediaHandle::image(mime, handle)?);
        Ok(())
    }

    pub fn attach_cooking_video(
        &mut self,
        mime: &str,
        handle: impl Into<String>,
    ) -> Result<(), CompositionError> {
        self.cooking_video = Some(MediaHandle::video(mime, handle)?);
        Ok(())
    }

    pub fn attach_step_image(
        &mut self,
        index: usize,
        mime: &str,
        handle: impl Into<String>,
    ) -> Result<(), CompositionError> {
        let image = MediaHandle::image(mime, handle)?;
        let len = self.steps.len();
        let step = self
            .steps
            .get_mut(index)
            .ok_or(CompositionError::IndexOutOfRange { index, len })?;
        step.image = Some(image);
        Ok(())
    }

    // === Lifecycle ===

    /// Validate the draft and mark it publishable.
    ///
    /// Fails with [`CompositionError::MissingTitle`] /
    /// [`CompositionError::MissingDescription`] on blank required fields,
    /// leaving the draft (and its phase) unchanged.
    pub fn publish(&mut self) -> Result<(), CompositionError> {
        if self.title.trim().is_empty() {
            return Err(CompositionError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(CompositionError::MissingDescription);
        }
        self.phase = DraftPhase::Published;
        Ok(())
    }

    /// Materialize the published draft into a canonical [`Recipe`] and
    /// reset the session to a fresh draft (all fields, media included).
    ///
    /// Only callable from [`DraftPhase::Published`].
    pub fn share(
        &mut self,
        author: UserId,
        now: DateTime<Utc>,
    ) -> Result<Recipe, CompositionError> {
        if self.phase != DraftPhase::Published {
            return Err(CompositionError::NotPublished);
        }

        let draft = std::mem::take(self);

        let mut recipe = Recipe::new(
            author,
            draft.title.trim(),
            draft.description.trim(),
            now,
        );
        recipe.cover_image = draft.cover_image;
        recipe.cooking_video = draft.cooking_video;
        recipe.ingredients = draft.ingredients;
        recipe.steps = draft.steps;
        recipe.style = draft.style;
        recipe.duration = draft.duration;
        Ok(recipe)
    }

    /// Discard everything and return to a fresh draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

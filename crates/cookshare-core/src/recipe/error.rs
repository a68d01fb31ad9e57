/// Errors raised by the social interaction rules.
///
/// All variants except `Storage` are expected, recoverable outcomes of a
/// single user action; they must leave stored state untouched and are
/// surfaced to the caller for user-facing messaging.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    /// The user already likes this recipe
    #[error("recipe already liked by this user")]
    AlreadyLiked,

    /// The user already favorited this recipe
    #[error("recipe already favorited by this user")]
    AlreadyFavorited,

    /// Comment content is empty after trimming
    #[error("comment content must not be empty")]
    EmptyContent,

    /// No recipe with the given id in the store
    #[error("recipe not found: {id}")]
    RecipeNotFound { id: String },

    /// Deletion requires an explicit user confirmation
    #[error("recipe deletion was not confirmed")]
    DeletionNotConfirmed,

    /// Persistence failure while applying the interaction
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

use serde::{Deserialize, Serialize};

use super::MediaHandle;

/// One cooking step of a recipe.
///
/// Steps form an ordered sequence; the order defines both the cooking
/// order and the playback order of the teaching video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Step {
    pub description: String,

    /// Optional illustration shown while this step's slide is on screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaHandle>,
}

impl Step {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image: None,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised when attaching media to a recipe or draft.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The declared MIME type is neither `image/*` nor `video/*`
    #[error("unsupported media type: {mime}")]
    UnsupportedMediaType { mime: String },
}

/// Opaque handle to embeddable media content (e.g. a base64 data URL).
///
/// The core never decodes or inspects the referenced bytes; the only
/// check performed is the MIME-category validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaHandle(String);

impl MediaHandle {
    /// Accept an image handle. The declared MIME type must be `image/*`.
    pub fn image(mime: &str, handle: impl Into<String>) -> Result<Self, MediaError> {
        Self::with_category(mime, "image/", handle)
    }

    /// Accept a video handle. The declared MIME type must be `video/*`.
    pub fn video(mime: &str, handle: impl Into<String>) -> Result<Self, MediaError> {
        Self::with_category(mime, "video/", handle)
    }

    fn with_category(
        mime: &str,
        category: &str,
        handle: impl Into<String>,
    ) -> Result<Self, MediaError> {
        if !mime.starts_with(category) {
            return Err(MediaError::UnsupportedMediaType {
                mime: mime.to_string(),
            });
        }
        Ok(Self(handle.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

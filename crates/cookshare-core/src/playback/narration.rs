use serde::{Deserialize, Serialize};

use crate::config::NarrationConfig;

/// Monotonic token identifying one narration dispatch.
///
/// Completion signals arrive asynchronously and may be delivered after
/// the slide (or the whole session) has already changed; the machine
/// matches the token and treats stale signals as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NarrationToken(pub u64);

/// One narration request handed to the narration device.
///
/// At most one request is outstanding at a time; issuing a new one
/// implicitly cancels any prior unfinished one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationRequest {
    pub text: String,
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl NarrationRequest {
    pub fn new(text: impl Into<String>, config: &NarrationConfig) -> Self {
        Self {
            text: text.into(),
            language: config.language.clone(),
            rate: config.rate,
            pitch: config.pitch,
        }
    }
}

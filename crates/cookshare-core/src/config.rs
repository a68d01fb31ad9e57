//! Playback configuration domain model

use serde::{Deserialize, Serialize};

/// Configuration for the simulated teaching-video playback.
///
/// These are display/pacing knobs, not core logic: the state machines in
/// [`crate::playback`] read them but never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// How long each slide stays on screen while playing, in milliseconds.
    ///
    /// Auto-advance is driven by this fixed dwell, independent of how long
    /// the narration of the slide actually takes.
    pub slide_dwell_ms: u64,

    /// Narration settings
    pub narration: NarrationConfig,

    /// Generation simulation settings
    pub generation: GenerationConfig,
}

/// Narration request parameters handed to the narration device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// BCP-47 locale tag for the synthesized voice
    pub language: String,

    /// Speech rate multiplier
    pub rate: f32,

    /// Voice pitch multiplier
    pub pitch: f32,
}

/// Configuration for the fake "render a video" progress sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Progress units added per tick (progress runs 0..=100)
    pub progress_step: u8,

    /// Tick interval in milliseconds
    pub tick_ms: u64,

    /// Human-readable phase labels, indexed by the generation phase.
    ///
    /// Display-only; the machine clamps the phase index to this list's
    /// bounds and never interprets the strings.
    pub phase_labels: Vec<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            slide_dwell_ms: 4000,
            narration: NarrationConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            language: "zh-CN".to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            progress_step: 5,
            tick_ms: 200,
            phase_labels: vec![
                "analyzing".to_string(),
                "storyboarding".to_string(),
                "rendering".to_string(),
            ],
        }
    }
}

//! Slide playback state machine.
//!
//! Pure transitions: `apply(event) -> Vec<PlaybackAction>`. The
//! orchestrator feeds events in (user input, dwell-timer expiry,
//! narration completion) and executes the returned actions (speak,
//! cancel, start/cancel the dwell timer). Nothing here touches a timer
//! or an audio device.
//!
//! Slide 0 is the title/description/cover intro; slides `1..=N` are the
//! recipe's steps in order. Auto-advance uses a fixed wall-clock dwell
//! per slide, independent of narration length; narration completion is
//! tracked but never drives advancement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NarrationConfig;
use crate::recipe::Recipe;

use super::{NarrationRequest, NarrationToken};

/// Narration text per slide, extracted from a recipe at attach time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackScript {
    /// Spoken on slide 0
    pub intro: String,
    /// Spoken on slides 1..=N
    pub steps: Vec<String>,
}

impl PlaybackScript {
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            intro: recipe.description.clone(),
            steps: recipe
                .steps
                .iter()
                .map(|s| s.description.clone())
                .collect(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    fn text_for_slide(&self, slide_index: usize) -> &str {
        if slide_index == 0 {
            &self.intro
        } else {
            &self.steps[slide_index - 1]
        }
    }
}

/// Observable playback state, scoped to one attached recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlaybackState {
    /// Current slide, in `[0, step_count]`
    pub slide_index: usize,

    /// Whether auto-advance is active
    pub is_playing: bool,

    /// Whether the current slide's narration is still in flight
    pub narration_active: bool,
}

/// Inputs to the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Play/pause button
    TogglePlay,

    /// Restart from slide 0 and keep playing
    Reset,

    /// The fixed per-slide dwell timer fired
    DwellElapsed,

    /// The narration device finished the utterance with this token
    NarrationFinished { token: NarrationToken },

    /// The recipe was deselected or replaced; tear everything down
    Detach,
}

/// Side effects requested by a transition, executed by the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackAction {
    /// Dispatch a narration request (implicitly cancels any prior one)
    Speak {
        request: NarrationRequest,
        token: NarrationToken,
    },

    /// Cancel any in-flight narration
    CancelNarration,

    /// (Re)start the per-slide dwell timer
    StartDwellTimer,

    /// Cancel the dwell timer
    CancelDwellTimer,
}

/// Slide sequencing machine for one attached recipe.
#[derive(Debug, Clone)]
pub struct PlaybackMachine {
    script: PlaybackScript,
    narration: NarrationConfig,
    state: PlaybackState,
    next_token: u64,
}

impl PlaybackMachine {
    pub fn new(script: PlaybackScript, narration: NarrationConfig) -> Self {
        Self {
            script,
            narration,
            state: PlaybackState::default(),
            next_token: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn step_count(&self) -> usize {
        self.script.step_count()
    }

    /// Progress through the steps as a percentage.
    ///
    /// 0 on the intro slide; otherwise `((i - 1) / N) * 100`, clamped.
    /// Recomputed from `slide_index` alone, never incrementally drifted.
    pub fn progress_percent(&self) -> f64 {
        let n = self.script.step_count();
        if self.state.slide_index == 0 || n == 0 {
            return 0.0;
        }
        let percent = ((self.state.slide_index - 1) as f64 / n as f64) * 100.0;
        percent.clamp(0.0, 100.0)
    }

    /// Apply one event, returning the side effects to execute.
    pub fn apply(&mut self, event: PlaybackEvent) -> Vec<PlaybackAction> {
        debug!(
            ?event,
            slide = self.state.slide_index,
            playing = self.state.is_playing,
            "playback transition"
        );
        match event {
            PlaybackEvent::TogglePlay => {
                if self.state.is_playing {
                    self.pause()
                } else {
                    self.play_from_start()
                }
            }
            PlaybackEvent::Reset => {
                // stop-then-play-from-start in one transition
                let mut actions = vec![PlaybackAction::CancelNarration];
                actions.extend(self.play_from_start());
                actions
            }
            PlaybackEvent::DwellElapsed => self.advance(),
            PlaybackEvent::NarrationFinished { token } => {
                // Stale completion (earlier slide, earlier recipe) is a no-op.
                if self.current_token() == Some(token) {
                    self.state.narration_active = false;
                }
                Vec::new()
            }
            PlaybackEvent::Detach => {
                self.state = PlaybackState::default();
                // Invalidate any token still in flight.
                self.next_token += 1;
                vec![
                    PlaybackAction::CancelNarration,
                    PlaybackAction::CancelDwellTimer,
                ]
            }
        }
    }

    fn play_from_start(&mut self) -> Vec<PlaybackAction> {
        self.state.slide_index = 0;
        self.state.is_playing = true;
        vec![
            self.speak_current_slide(),
            PlaybackAction::StartDwellTimer,
        ]
    }

    fn pause(&mut self) -> Vec<PlaybackAction> {
        self.state.is_playing = false;
        self.state.narration_active = false;
        vec![
            PlaybackAction::CancelNarration,
            PlaybackAction::CancelDwellTimer,
        ]
    }

    fn advance(&mut self) -> Vec<PlaybackAction> {
        if !self.state.is_playing {
            // Timer expiry racing a stop; the cancel already happened.
            return Vec::new();
        }
        let next = self.state.slide_index + 1;
        if next > self.script.step_count() {
            // Ran past the last step: back to idle at the intro slide.
            self.state = PlaybackState::default();
            return vec![
                PlaybackAction::CancelNarration,
                PlaybackAction::CancelDwellTimer,
            ];
        }
        self.state.slide_index = next;
        vec![
            self.speak_current_slide(),
            PlaybackAction::StartDwellTimer,
        ]
    }

    fn speak_current_slide(&mut self) -> PlaybackAction {
        let token = NarrationToken(self.next_token);
        self.next_token += 1;
        self.state.narration_active = true;
        PlaybackAction::Speak {
            request: NarrationRequest::new(
                self.script.text_for_slide(self.state.slide_index),
                &self.narration,
            ),
            token,
        }
    }

    fn current_token(&self) -> Option<NarrationToken> {
        if self.state.narration_active {
            self.next_token.checked_sub(1).map(NarrationToken)
        } else {
            None
        }
    }
}

//! Fake "render a video" progress sequence.
//!
//! Orthogonal to slide playback: the generation run may overlap with
//! playing or idle slides and is cancelled independently.

use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;

/// Observable generation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationState {
    pub is_generating: bool,

    /// Progress in `[0, 100]`
    pub progress: u8,

    /// Index into the configured phase labels, clamped to their bounds
    pub phase: usize,
}

/// Tick-driven progress machine for the simulated generation run.
#[derive(Debug, Clone)]
pub struct GenerationMachine {
    config: GenerationConfig,
    state: GenerationState,
}

impl GenerationMachine {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            state: GenerationState::default(),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_generating(&self) -> bool {
        self.state.is_generating
    }

    /// Label of the current phase; display-only.
    pub fn phase_label(&self) -> &str {
        let labels = &self.config.phase_labels;
        labels
            .get(self.state.phase.min(labels.len().saturating_sub(1)))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Start (or restart) a generation run.
    pub fn start(&mut self) {
        self.state = GenerationState {
            is_generating: true,
            progress: 0,
            phase: 0,
        };
    }

    /// Advance by one tick; returns whether the run is still active.
    ///
    /// A tick arriving after the run finished (or was never started) is a
    /// stale timer callback and changes nothing.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_generating {
            return false;
        }
        let step = self.config.progress_step.max(1);
        self.state.progress = self.state.progress.saturating_add(step).min(100);
        if self.state.progress >= 100 {
            self.state.is_generating = false;
            // Phase advances when a run completes, but never past the
            // configured label list.
            if self.state.phase + 1 < self.config.phase_labels.len() {
                self.state.phase += 1;
            }
        }
        self.state.is_generating
    }

    /// Ticks left until the run completes: `ceil((100 - progress) / step)`.
    pub fn remaining_ticks(&self) -> u32 {
        if !self.state.is_generating {
            return 0;
        }
        let step = u32::from(self.config.progress_step.max(1));
        let left = u32::from(100 - self.state.progress);
        left.div_ceil(step)
    }

    /// Abort the run, e.g. when the recipe is deselected.
    pub fn cancel(&mut self) {
        self.state = GenerationState::default();
    }
}

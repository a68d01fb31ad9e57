//! Simulated teaching-video playback.
//!
//! Two explicit, independently cancellable state machines, composed by
//! the caller (see `cookshare-app`'s playback controller):
//!
//! - [`PlaybackMachine`]: slide sequencing, play/pause/reset and
//!   per-slide narration dispatch, as a pure
//!   `(state, event) -> actions` transition function. Runtime behaviors
//!   (timers, audio) are the orchestrator's job.
//! - [`GenerationMachine`]: the fake "render a video" progress/phase
//!   sequence, orthogonal to slide playback.
//!
//! Keeping the machines pure keeps every transition unit-testable and
//! rules out the leaked-timer class of bug: the machines only *ask* for
//! timers via actions, and every exit path emits the matching cancel.

mod generation;
mod machine;
mod narration;

#[cfg(test)]
mod tests;

pub use generation::{GenerationMachine, GenerationState};
pub use machine::{PlaybackAction, PlaybackEvent, PlaybackMachine, PlaybackScript, PlaybackState};
pub use narration::{NarrationRequest, NarrationToken};

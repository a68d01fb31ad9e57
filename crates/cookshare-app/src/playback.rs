//! Playback controller: executes the pure playback machines against
//! real timers and the narration device.
//!
//! The controller owns two independently cancellable runtime pieces,
//! mirroring the two machines:
//!
//! - the per-slide dwell timer driving auto-advance, and
//! - the generation ticker driving the fake render-progress run.
//!
//! Both are `tokio::spawn` handles kept in replace-on-start slots and
//! aborted on every exit path (pause, completion, detach, drop), so a
//! timer belonging to a previous recipe can never fire into fresh state.
//! Timer expiry and narration completion are funneled through one event
//! channel into the machine, which makes stale callbacks harmless: the
//! machine rejects them by state or by narration token.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use cookshare_core::playback::{
    GenerationMachine, PlaybackAction, PlaybackEvent, PlaybackMachine, PlaybackScript,
};
use cookshare_core::ports::{NarrationFinishedRx, NarratorPort};
use cookshare_core::{PlaybackConfig, Recipe};

/// Combined observable state for rendering the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackView {
    pub slide_index: usize,
    pub step_count: usize,
    pub is_playing: bool,
    pub narration_active: bool,
    pub progress_percent: f64,
    pub is_generating: bool,
    pub generation_progress: u8,
    pub generation_phase_label: String,
    pub generation_remaining_ticks: u32,
}

struct Shared {
    narrator: Arc<dyn NarratorPort>,
    config: PlaybackConfig,
    machine: Mutex<Option<PlaybackMachine>>,
    generation: Mutex<GenerationMachine>,
    dwell_timer: Mutex<Option<AbortHandle>>,
    gen_ticker: Mutex<Option<AbortHandle>>,
    events_tx: mpsc::UnboundedSender<PlaybackEvent>,
}

/// Drives the simulated teaching video for the currently attached recipe.
pub struct PlaybackController {
    shared: Arc<Shared>,
    driver: AbortHandle,
}

impl PlaybackController {
    /// Build a controller over the given narration device.
    ///
    /// `finished_rx` is the completion side of the narrator's channel:
    /// every token the device reports is routed back through the machine.
    pub fn new(
        narrator: Arc<dyn NarratorPort>,
        config: PlaybackConfig,
        finished_rx: NarrationFinishedRx,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let generation = GenerationMachine::new(config.generation.clone());
        let shared = Arc::new(Shared {
            narrator,
            config,
            machine: Mutex::new(None),
            generation: Mutex::new(generation),
            dwell_timer: Mutex::new(None),
            gen_ticker: Mutex::new(None),
            events_tx,
        });

        let driver = tokio::spawn(Shared::drive(Arc::clone(&shared), events_rx, finished_rx))
            .abort_handle();

        Self { shared, driver }
    }

    /// Attach a recipe, tearing down everything owned by the previous one
    /// (narration, dwell timer, generation run) in the same call.
    pub async fn attach(&self, recipe: &Recipe) {
        self.shared.teardown().await;
        let script = PlaybackScript::for_recipe(recipe);
        let machine = PlaybackMachine::new(script, self.shared.config.narration.clone());
        *self.shared.machine.lock().await = Some(machine);
        debug!(steps = recipe.steps.len(), "playback attached");
    }

    /// Clear the attached recipe; cancels everything in flight.
    pub async fn detach(&self) {
        self.shared.teardown().await;
        debug!("playback detached");
    }

    /// Play/pause button.
    pub async fn toggle_play(&self) {
        self.shared.handle_event(PlaybackEvent::TogglePlay).await;
    }

    /// Restart narration and slides from the beginning.
    pub async fn reset(&self) {
        self.shared.handle_event(PlaybackEvent::Reset).await;
    }

    /// Kick off the fake generation run. Returns `false` when no recipe
    /// is attached.
    pub async fn generate_video(&self) -> bool {
        if self.shared.machine.lock().await.is_none() {
            return false;
        }
        self.shared.generation.lock().await.start();

        let mut slot = self.shared.gen_ticker.lock().await;
        if let Some(existing) = slot.take() {
            existing.abort();
        }
        let shared = Arc::clone(&self.shared);
        let tick = Duration::from_millis(self.shared.config.generation.tick_ms);
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(tick).await;
                if !shared.generation.lock().await.tick() {
                    break;
                }
            }
        })
        .abort_handle();
        *slot = Some(handle);
        true
    }

    /// Snapshot of the player state; `None` when nothing is attached.
    pub async fn view(&self) -> Option<PlaybackView> {
        let machine = self.shared.machine.lock().await;
        let machine = machine.as_ref()?;
        let generation = self.shared.generation.lock().await;
        let state = machine.state();
        let generation_state = generation.state();
        Some(PlaybackView {
            slide_index: state.slide_index,
            step_count: machine.step_count(),
            is_playing: state.is_playing,
            narration_active: state.narration_active,
            progress_percent: machine.progress_percent(),
            is_generating: generation_state.is_generating,
            generation_progress: generation_state.progress,
            generation_phase_label: generation.phase_label().to_string(),
            generation_remaining_ticks: generation.remaining_ticks(),
        })
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

impl Shared {
    async fn drive(
        shared: Arc<Self>,
        mut events_rx: mpsc::UnboundedReceiver<PlaybackEvent>,
        mut finished_rx: NarrationFinishedRx,
    ) {
        loop {
            tokio::select! {
                event = events_rx.recv() => match event {
                    Some(event) => shared.handle_event(event).await,
                    None => break,
                },
                token = finished_rx.recv() => match token {
                    Some(token) => {
                        shared
                            .handle_event(PlaybackEvent::NarrationFinished { token })
                            .await;
                    }
                    None => break,
                },
            }
        }
    }

    async fn handle_event(&self, event: PlaybackEvent) {
        let actions = {
            let mut machine = self.machine.lock().await;
            let Some(machine) = machine.as_mut() else {
                // Event raced a detach; everything it touched is gone.
                return;
            };
            machine.apply(event)
        };
        self.execute(actions).await;
    }

    async fn execute(&self, actions: Vec<PlaybackAction>) {
        for action in actions {
            match action {
                PlaybackAction::Speak { request, token } => {
                    if let Err(e) = self.narrator.speak(&request, token).await {
                        warn!(error = %e, "narration dispatch failed");
                    }
                }
                PlaybackAction::CancelNarration => {
                    if let Err(e) = self.narrator.cancel_all().await {
                        warn!(error = %e, "narration cancel failed");
                    }
                }
                PlaybackAction::StartDwellTimer => self.start_dwell_timer().await,
                PlaybackAction::CancelDwellTimer => {
                    if let Some(handle) = self.dwell_timer.lock().await.take() {
                        handle.abort();
                    }
                }
            }
        }
    }

    async fn start_dwell_timer(&self) {
        let mut slot = self.dwell_timer.lock().await;
        if let Some(existing) = slot.take() {
            existing.abort();
        }
        let tx = self.events_tx.clone();
        let dwell = Duration::from_millis(self.config.slide_dwell_ms);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(dwell).await;
            let _ = tx.send(PlaybackEvent::DwellElapsed);
        })
        .abort_handle();
        *slot = Some(handle);
    }

    /// Cancel narration, both timers and all machine state, atomically
    /// from the caller's point of view.
    async fn teardown(&self) {
        if let Some(handle) = self.dwell_timer.lock().await.take() {
            handle.abort();
        }
        if let Some(handle) = self.gen_ticker.lock().await.take() {
            handle.abort();
        }
        if let Err(e) = self.narrator.cancel_all().await {
            warn!(error = %e, "narration cancel failed");
        }
        *self.machine.lock().await = None;
        self.generation.lock().await.cancel();
    }
}

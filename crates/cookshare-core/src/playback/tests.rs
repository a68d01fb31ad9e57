use crate::config::{GenerationConfig, NarrationConfig};
use crate::playback::*;

fn script(steps: usize) -> PlaybackScript {
    PlaybackScript {
        intro: "intro".to_string(),
        steps: (1..=steps).map(|i| format!("step {i}")).collect(),
    }
}

fn machine(steps: usize) -> PlaybackMachine {
    PlaybackMachine::new(script(steps), NarrationConfig::default())
}

fn spoken_text(actions: &[PlaybackAction]) -> Option<String> {
    actions.iter().find_map(|a| match a {
        PlaybackAction::Speak { request, .. } => Some(request.text.clone()),
        _ => None,
    })
}

fn spoken_token(actions: &[PlaybackAction]) -> Option<NarrationToken> {
    actions.iter().find_map(|a| match a {
        PlaybackAction::Speak { token, .. } => Some(*token),
        _ => None,
    })
}

// =========================================================================
// Slide sequencing
// =========================================================================

#[test]
fn toggle_play_starts_from_intro_slide() {
    let mut m = machine(3);
    let actions = m.apply(PlaybackEvent::TogglePlay);

    assert!(m.state().is_playing);
    assert_eq!(m.state().slide_index, 0);
    assert_eq!(spoken_text(&actions).as_deref(), Some("intro"));
    assert!(actions.contains(&PlaybackAction::StartDwellTimer));
}

#[test]
fn toggle_play_while_playing_pauses_and_cancels_everything() {
    let mut m = machine(3);
    m.apply(PlaybackEvent::TogglePlay);
    let actions = m.apply(PlaybackEvent::TogglePlay);

    assert!(!m.state().is_playing);
    assert!(actions.contains(&PlaybackAction::CancelNarration));
    assert!(actions.contains(&PlaybackAction::CancelDwellTimer));
}

#[test]
fn auto_advance_visits_each_slide_once_then_returns_to_idle() {
    let n = 4;
    let mut m = machine(n);
    let mut visited = vec![m.state().slide_index];
    m.apply(PlaybackEvent::TogglePlay);
    assert_eq!(m.state().slide_index, 0);

    loop {
        m.apply(PlaybackEvent::DwellElapsed);
        if !m.state().is_playing {
            break;
        }
        visited.push(m.state().slide_index);
    }

    assert_eq!(visited, (0..=n).collect::<Vec<_>>());
    assert_eq!(m.state().slide_index, 0);
    assert!(!m.state().is_playing);
}

#[test]
fn advance_speaks_the_step_description() {
    let mut m = machine(2);
    m.apply(PlaybackEvent::TogglePlay);

    let actions = m.apply(PlaybackEvent::DwellElapsed);
    assert_eq!(m.state().slide_index, 1);
    assert_eq!(spoken_text(&actions).as_deref(), Some("step 1"));

    let actions = m.apply(PlaybackEvent::DwellElapsed);
    assert_eq!(m.state().slide_index, 2);
    assert_eq!(spoken_text(&actions).as_deref(), Some("step 2"));
}

#[test]
fn dwell_after_pause_is_a_no_op() {
    let mut m = machine(2);
    m.apply(PlaybackEvent::TogglePlay);
    m.apply(PlaybackEvent::TogglePlay);

    let actions = m.apply(PlaybackEvent::DwellElapsed);
    assert!(actions.is_empty());
    assert_eq!(m.state().slide_index, 0);
}

#[test]
fn reset_restarts_from_slide_zero_while_playing() {
    let mut m = machine(3);
    m.apply(PlaybackEvent::TogglePlay);
    m.apply(PlaybackEvent::DwellElapsed);
    m.apply(PlaybackEvent::DwellElapsed);
    assert_eq!(m.state().slide_index, 2);

    let actions = m.apply(PlaybackEvent::Reset);
    assert_eq!(m.state().slide_index, 0);
    assert!(m.state().is_playing);
    assert!(actions.contains(&PlaybackAction::CancelNarration));
    assert_eq!(spoken_text(&actions).as_deref(), Some("intro"));
    assert!(actions.contains(&PlaybackAction::StartDwellTimer));
}

#[test]
fn detach_resets_state_and_cancels_timers() {
    let mut m = machine(3);
    m.apply(PlaybackEvent::TogglePlay);
    m.apply(PlaybackEvent::DwellElapsed);

    let actions = m.apply(PlaybackEvent::Detach);
    assert_eq!(m.state(), PlaybackState::default());
    assert!(actions.contains(&PlaybackAction::CancelNarration));
    assert!(actions.contains(&PlaybackAction::CancelDwellTimer));
}

// =========================================================================
// Narration tokens
// =========================================================================

#[test]
fn matching_narration_completion_clears_the_active_flag() {
    let mut m = machine(2);
    let actions = m.apply(PlaybackEvent::TogglePlay);
    let token = spoken_token(&actions).unwrap();
    assert!(m.state().narration_active);

    let follow_up = m.apply(PlaybackEvent::NarrationFinished { token });
    assert!(follow_up.is_empty());
    assert!(!m.state().narration_active);
}

#[test]
fn stale_narration_completion_is_a_no_op() {
    let mut m = machine(2);
    let first = m.apply(PlaybackEvent::TogglePlay);
    let stale = spoken_token(&first).unwrap();

    // Advance to the next slide; a new utterance is now in flight.
    m.apply(PlaybackEvent::DwellElapsed);
    let state_before = m.state();

    let actions = m.apply(PlaybackEvent::NarrationFinished { token: stale });
    assert!(actions.is_empty());
    assert_eq!(m.state(), state_before);
    assert!(m.state().narration_active);
}

#[test]
fn completion_arriving_after_detach_is_a_no_op() {
    let mut m = machine(2);
    let actions = m.apply(PlaybackEvent::TogglePlay);
    let token = spoken_token(&actions).unwrap();

    m.apply(PlaybackEvent::Detach);
    let actions = m.apply(PlaybackEvent::NarrationFinished { token });
    assert!(actions.is_empty());
    assert_eq!(m.state(), PlaybackState::default());
}

#[test]
fn each_speak_uses_a_fresh_token() {
    let mut m = machine(3);
    let t0 = spoken_token(&m.apply(PlaybackEvent::TogglePlay)).unwrap();
    let t1 = spoken_token(&m.apply(PlaybackEvent::DwellElapsed)).unwrap();
    let t2 = spoken_token(&m.apply(PlaybackEvent::DwellElapsed)).unwrap();
    assert!(t0 < t1 && t1 < t2);
}

// =========================================================================
// Progress percentage
// =========================================================================

#[test]
fn progress_is_zero_on_intro_slide() {
    let m = machine(4);
    assert_eq!(m.progress_percent(), 0.0);
}

#[test]
fn progress_at_last_step_matches_formula() {
    // 4 steps: slide 4 -> (4-1)/4 * 100 = 75
    let mut m = machine(4);
    m.apply(PlaybackEvent::TogglePlay);
    for _ in 0..4 {
        m.apply(PlaybackEvent::DwellElapsed);
    }
    assert_eq!(m.state().slide_index, 4);
    assert!((m.progress_percent() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn progress_handles_zero_step_recipes() {
    let mut m = machine(0);
    assert_eq!(m.progress_percent(), 0.0);
    m.apply(PlaybackEvent::TogglePlay);
    // Only the intro slide exists; the first dwell ends playback.
    m.apply(PlaybackEvent::DwellElapsed);
    assert!(!m.state().is_playing);
    assert_eq!(m.progress_percent(), 0.0);
}

// =========================================================================
// Generation simulation
// =========================================================================

fn generation() -> GenerationMachine {
    GenerationMachine::new(GenerationConfig::default())
}

#[test]
fn generation_run_climbs_to_completion() {
    let mut g = generation();
    g.start();
    assert!(g.is_generating());
    assert_eq!(g.state().progress, 0);
    assert_eq!(g.remaining_ticks(), 20);

    let mut ticks = 0;
    while g.tick() {
        ticks += 1;
        assert!(ticks < 100, "generation never completed");
    }
    assert_eq!(ticks + 1, 20);
    assert_eq!(g.state().progress, 100);
    assert!(!g.is_generating());
    assert_eq!(g.remaining_ticks(), 0);
}

#[test]
fn completed_run_advances_phase_within_label_bounds() {
    let mut g = generation();
    g.start();
    assert_eq!(g.state().phase, 0);
    assert_eq!(g.phase_label(), "analyzing");

    while g.tick() {}
    assert_eq!(g.state().phase, 1);
    assert_eq!(g.phase_label(), "storyboarding");

    // Phase never runs past the label list, no matter how many runs finish.
    for _ in 0..5 {
        g.start();
        // start resets the phase for a new run
        assert_eq!(g.state().phase, 0);
        while g.tick() {}
    }
    assert!(g.state().phase < 3);
}

#[test]
fn stale_tick_after_completion_changes_nothing() {
    let mut g = generation();
    g.start();
    while g.tick() {}
    let done = g.state();

    assert!(!g.tick());
    assert_eq!(g.state(), done);
}

#[test]
fn cancel_resets_generation_state() {
    let mut g = generation();
    g.start();
    g.tick();
    g.cancel();
    assert_eq!(g.state(), GenerationState::default());
    assert_eq!(g.remaining_ticks(), 0);
}

#[test]
fn remaining_ticks_uses_ceiling_division() {
    let mut g = GenerationMachine::new(GenerationConfig {
        progress_step: 7,
        ..GenerationConfig::default()
    });
    g.start();
    // ceil(100 / 7) = 15
    assert_eq!(g.remaining_ticks(), 15);
    g.tick();
    // ceil(93 / 7) = 14
    assert_eq!(g.remaining_ticks(), 14);
}

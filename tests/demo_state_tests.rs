//! Tests for the demo state machine
//!
//! These tests verify:
//! - Submission guards (empty prompt, run in progress)
//! - The fixed five-step script regardless of prompt
//! - Step ordering and file/source bookkeeping
//! - Session playback through the worker thread

use merch::config_file::{DemoConfig, Timing};
use merch::demo::script::{self, FINAL_RESPONSE};
use merch::demo::{DemoEvent, DemoSession, DemoState, StepTransitionError, SubmitError, Timeline};
use merch::types::{FileStatus, StepStatus};
use merch::MerchError;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Apply every event of a zero-delay timeline to `state`
fn run_to_completion(state: &mut DemoState) {
    let config = DemoConfig {
        timing: Timing::instant(),
        ..DemoConfig::default()
    };
    let timeline = Timeline::build(&config, &mut StdRng::seed_from_u64(1));
    for entry in timeline.entries() {
        state.apply(&entry.event).unwrap();
    }
}

fn instant_session() -> DemoSession {
    DemoSession::new(DemoConfig {
        timing: Timing::instant(),
        seed: Some(42),
        ..DemoConfig::default()
    })
}

// =============================================================================
// Submission Guards
// =============================================================================

#[test]
fn test_empty_prompt_changes_nothing() {
    let mut state = DemoState::new();
    assert_eq!(state.submit(""), Err(SubmitError::EmptyPrompt));
    assert_eq!(state.submit(" \t\n"), Err(SubmitError::EmptyPrompt));
    assert!(state.chats().is_empty());
    assert!(!state.is_processing());
}

#[test]
fn test_submit_while_running_is_rejected() {
    let mut state = DemoState::new();
    state.submit("first").unwrap();
    let before = state.clone();

    assert_eq!(state.submit("second"), Err(SubmitError::RunInProgress));
    assert_eq!(state, before);
}

#[test]
fn test_busy_check_wins_over_empty_prompt() {
    let mut state = DemoState::new();
    state.submit("first").unwrap();
    assert_eq!(state.submit(""), Err(SubmitError::RunInProgress));
}

#[test]
fn test_submit_error_converts_to_merch_error() {
    let err: MerchError = SubmitError::EmptyPrompt.into();
    assert!(matches!(err, MerchError::State(_)));
}

// =============================================================================
// Script Shape
// =============================================================================

#[test]
fn test_five_steps_regardless_of_prompt() {
    let reference = script::research_steps();
    for prompt in ["a", "Who are my competitors?", "🚀 merch"] {
        let mut state = DemoState::new();
        state.submit(prompt).unwrap();
        state.apply(&DemoEvent::RevealSteps).unwrap();
        let steps = state.active_message().unwrap().steps();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps, reference.as_slice());
        assert!(steps.iter().all(|s| s.status == StepStatus::Pending));
    }
}

#[test]
fn test_steps_cannot_skip_or_reorder() {
    let mut state = DemoState::new();
    state.submit("go").unwrap();
    state.apply(&DemoEvent::RevealSteps).unwrap();

    assert!(matches!(
        state.apply(&DemoEvent::StartStep(1)),
        Err(StepTransitionError::OutOfOrder { index: 1, expected: 0 })
    ));
    assert!(state.apply(&DemoEvent::CompleteStep(0)).is_err());

    state.apply(&DemoEvent::StartStep(0)).unwrap();
    assert!(state.apply(&DemoEvent::StartStep(0)).is_err());
    assert!(state.apply(&DemoEvent::StartStep(1)).is_err());
    state.apply(&DemoEvent::CompleteStep(0)).unwrap();
    assert!(state.apply(&DemoEvent::CompleteStep(0)).is_err());
    state.apply(&DemoEvent::StartStep(1)).unwrap();
}

#[test]
fn test_response_waits_for_steps() {
    let mut state = DemoState::new();
    state.submit("go").unwrap();
    state.apply(&DemoEvent::RevealSteps).unwrap();
    assert!(state.apply(&DemoEvent::AppendChunk("x".into())).is_err());
}

#[test]
fn test_events_without_run_are_rejected() {
    let mut state = DemoState::new();
    assert_eq!(
        state.apply(&DemoEvent::RevealSteps),
        Err(StepTransitionError::NoActiveRun)
    );
}

// =============================================================================
// Files and Sources
// =============================================================================

#[test]
fn test_competitors_csv_example() {
    let mut state = DemoState::new();
    assert!(state.files().is_empty());
    state.submit("Who are my competitors?").unwrap();
    state.apply(&DemoEvent::RevealSteps).unwrap();

    state.apply(&DemoEvent::StartStep(0)).unwrap();
    state.apply(&DemoEvent::CompleteStep(0)).unwrap();
    assert_eq!(state.files().len(), 1);
    assert_eq!(state.files()[0].name, "Competitors.csv");
    assert_eq!(state.files()[0].status, FileStatus::New);

    for index in 1..3 {
        state.apply(&DemoEvent::StartStep(index)).unwrap();
        state.apply(&DemoEvent::CompleteStep(index)).unwrap();
    }
    assert_eq!(state.files()[0].name, "Competitor-products.csv");
    assert_eq!(state.files()[0].status, FileStatus::Updated);
    assert_eq!(state.files().len(), 2);
}

#[test]
fn test_upsert_moves_to_front_without_duplicates() {
    let mut state = DemoState::new();
    state.upsert_file("a.csv", FileStatus::New);
    state.upsert_file("b.csv", FileStatus::New);
    state.upsert_file("a.csv", FileStatus::Updated);

    let names: Vec<&str> = state.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);
    assert_eq!(state.files()[0].status, FileStatus::Updated);
}

#[test]
fn test_sources_accumulate_across_runs() {
    let mut state = DemoState::new();
    state.submit("one").unwrap();
    run_to_completion(&mut state);
    assert_eq!(state.sources().len(), script::total_sources());

    state.submit("two").unwrap();
    run_to_completion(&mut state);
    assert_eq!(state.sources().len(), 2 * script::total_sources());
    assert_eq!(state.chats().len(), 4);
}

#[test]
fn test_sources_surface_when_step_starts() {
    let mut state = DemoState::new();
    state.submit("go").unwrap();
    state.apply(&DemoEvent::RevealSteps).unwrap();
    state.apply(&DemoEvent::StartStep(0)).unwrap();
    assert_eq!(state.sources().len(), 1);
    assert!(state.files().is_empty());
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn test_completed_run_has_full_response() {
    let mut state = DemoState::new();
    state.submit("go").unwrap();
    run_to_completion(&mut state);

    assert!(!state.is_processing());
    let reply = state.chats().last().unwrap();
    assert!(!reply.is_streaming);
    assert!(!reply.is_thinking);
    assert_eq!(reply.content, FINAL_RESPONSE);
    assert!(reply.steps().iter().all(|s| s.status == StepStatus::Completed));
    assert_eq!(state.files().len(), 4);
}

#[test]
fn test_session_plays_through_worker() {
    let mut session = instant_session();
    session.submit("go").unwrap();
    assert!(session.is_processing());
    assert!(session.submit("again").is_err());

    let mut applied = 0;
    while session.next_blocking().is_some() {
        applied += 1;
    }
    assert!(applied > 10);
    assert!(!session.is_processing());
    assert_eq!(session.state().chats().last().unwrap().content, FINAL_RESPONSE);

    // The guard is released once the run finishes
    session.submit("again").unwrap();
}

#[test]
fn test_session_pump_eventually_finishes() {
    let mut session = instant_session();
    session.submit("go").unwrap();

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while session.is_processing() && std::time::Instant::now() < deadline {
        session.pump();
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    assert!(!session.is_processing());
    assert_eq!(session.state().files().len(), 4);
}

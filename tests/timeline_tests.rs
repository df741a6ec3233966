//! Tests for the precomputed run timeline and its worker
//!
//! These tests verify:
//! - Event order: reveal, then start/complete per step, then chunks, then finish
//! - Delays follow the configured timing and speed
//! - The runner delivers exactly the timeline, in order

use merch::config_file::{DemoConfig, Timing};
use merch::demo::script::{FINAL_RESPONSE, STEP_COUNT};
use merch::demo::timeline::response_chunks;
use merch::demo::{DemoEvent, DemoRunner, Timeline};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn build(config: &DemoConfig, seed: u64) -> Timeline {
    Timeline::build(config, &mut StdRng::seed_from_u64(seed))
}

fn events(timeline: &Timeline) -> Vec<DemoEvent> {
    timeline.entries().iter().map(|e| e.event.clone()).collect()
}

#[test]
fn test_event_order() {
    let config = DemoConfig::default();
    let events = events(&build(&config, 3));

    assert_eq!(events[0], DemoEvent::RevealSteps);
    for index in 0..STEP_COUNT {
        assert_eq!(events[1 + 2 * index], DemoEvent::StartStep(index));
        assert_eq!(events[2 + 2 * index], DemoEvent::CompleteStep(index));
    }
    assert_eq!(events.last(), Some(&DemoEvent::Finish));

    let streamed: String = events
        .iter()
        .filter_map(|e| match e {
            DemoEvent::AppendChunk(chunk) => Some(chunk.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(streamed, FINAL_RESPONSE);
}

#[test]
fn test_event_count_matches_chunking() {
    let config = DemoConfig {
        chunk_size: 7,
        ..DemoConfig::default()
    };
    let timeline = build(&config, 0);
    let chunks = response_chunks(FINAL_RESPONSE, 7).len();
    assert_eq!(timeline.len(), 1 + 2 * STEP_COUNT + chunks + 1);
}

#[test]
fn test_delays_follow_timing() {
    let config = DemoConfig {
        timing: Timing {
            thinking_ms: 100,
            step_base_ms: 50,
            step_jitter_ms: 0,
            step_pause_ms: 20,
            chunk_interval_ms: 1,
        },
        ..DemoConfig::default()
    };
    let timeline = build(&config, 0);
    let entries = timeline.entries();

    assert_eq!(entries[0].delay, Duration::from_millis(100));
    assert_eq!(entries[1].delay, Duration::ZERO);
    assert_eq!(entries[2].delay, Duration::from_millis(50));
    assert_eq!(entries[3].delay, Duration::from_millis(20));

    let chunks = response_chunks(FINAL_RESPONSE, config.chunk_size).len() as u64;
    // thinking + 5 steps of work + 4 pauses between steps + pause before
    // streaming + an interval after every chunk but the first, plus finish
    let expected = 100 + 5 * 50 + 4 * 20 + 20 + chunks;
    assert_eq!(timeline.total_duration(), Duration::from_millis(expected));
}

#[test]
fn test_speed_scales_total_duration() {
    let config = DemoConfig {
        timing: Timing {
            thinking_ms: 1000,
            step_base_ms: 200,
            step_jitter_ms: 0,
            step_pause_ms: 100,
            chunk_interval_ms: 10,
        },
        ..DemoConfig::default()
    };
    let normal = build(&config, 9).total_duration();
    let fast = build(&config.with_speed(2.0).unwrap(), 9).total_duration();
    assert_eq!(fast, normal / 2);
}

#[test]
fn test_different_seeds_can_differ() {
    let config = DemoConfig::default();
    let distinct = (0..10)
        .map(|seed| build(&config, seed).total_duration())
        .collect::<std::collections::HashSet<_>>();
    assert!(distinct.len() > 1);
}

#[test]
fn test_runner_delivers_timeline_in_order() {
    let config = DemoConfig {
        timing: Timing::instant(),
        ..DemoConfig::default()
    };
    let timeline = build(&config, 5);
    let expected = events(&timeline);

    let mut runner = DemoRunner::spawn(timeline);
    let mut received = Vec::new();
    while let Some(event) = runner.next_blocking() {
        received.push(event);
    }
    assert_eq!(received, expected);
    assert!(runner.is_finished());
}

#[test]
fn test_dropping_runner_mid_run_is_safe() {
    let config = DemoConfig {
        timing: Timing {
            thinking_ms: 10,
            ..Timing::instant()
        },
        ..DemoConfig::default()
    };
    let runner = DemoRunner::spawn(build(&config, 0));
    drop(runner);
}

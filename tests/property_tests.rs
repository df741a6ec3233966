//! Property-Based Tests for Merch
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Enum string round-trips (parse → to_string → parse)
//! - Response chunking and submission guards
//! - Reveal animation and landing scroll invariants
//! - Prompt editing never leaves the cursor out of range

use merch::demo::DemoState;
use merch::demo::timeline::response_chunks;
use merch::input::PromptInput;
use merch::site::reveal::RevealPhase;
use merch::site::{LandingState, Reveal};
use merch::types::{FileStatus, SourceKind, StepStatus};
use merch::ui::landing;
use proptest::prelude::*;
use std::time::Duration;

// =============================================================================
// Enum Property Tests
// =============================================================================

fn step_status_strategy() -> impl Strategy<Value = StepStatus> {
    prop_oneof![
        Just(StepStatus::Pending),
        Just(StepStatus::Running),
        Just(StepStatus::Completed),
    ]
}

fn source_kind_strategy() -> impl Strategy<Value = SourceKind> {
    prop_oneof![
        Just(SourceKind::Web),
        Just(SourceKind::Reddit),
        Just(SourceKind::X),
        Just(SourceKind::Database),
    ]
}

proptest! {
    /// StepStatus: to_string → parse round-trip is identity
    #[test]
    fn step_status_roundtrip(status in step_status_strategy()) {
        let parsed: StepStatus = status.to_string().parse().expect("Should parse");
        prop_assert_eq!(status, parsed);
    }

    /// StepStatus: next() always moves forward
    #[test]
    fn step_status_next_moves_forward(status in step_status_strategy()) {
        if let Some(next) = status.next() {
            prop_assert_eq!(next.order(), status.order() + 1);
        } else {
            prop_assert!(status.is_terminal());
        }
    }

    /// SourceKind: Display output is non-empty lowercase and parses back
    #[test]
    fn source_kind_display_is_valid(kind in source_kind_strategy()) {
        let s = kind.to_string();
        prop_assert!(!s.is_empty());
        prop_assert_eq!(s.to_lowercase(), s.clone());
        let parsed: SourceKind = s.parse().expect("Should parse");
        prop_assert_eq!(kind, parsed);
    }
}

// =============================================================================
// Demo Property Tests
// =============================================================================

proptest! {
    /// Chunks reassemble to the input and only the last may be short
    #[test]
    fn chunks_reassemble(text in "\\PC{0,200}", size in 1usize..16) {
        let chunks = response_chunks(&text, size);
        prop_assert_eq!(chunks.concat(), text);
        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|c| c.chars().count() == size));
            prop_assert!(last.chars().count() <= size);
            prop_assert!(!last.is_empty());
        }
    }

    /// Whitespace-only prompts never start a run
    #[test]
    fn blank_prompts_rejected(prompt in "[ \\t\\n]{0,10}") {
        let mut state = DemoState::new();
        prop_assert!(state.submit(&prompt).is_err());
        prop_assert!(state.chats().is_empty());
    }

    /// Any prompt with visible text starts exactly one run
    #[test]
    fn non_blank_prompts_accepted(prompt in "[a-zA-Z0-9?!]{1,40}") {
        let mut state = DemoState::new();
        prop_assert!(state.submit(&prompt).is_ok());
        prop_assert!(state.is_processing());
        prop_assert_eq!(state.chats().len(), 2);
        prop_assert!(state.submit(&prompt).is_err());
    }

    /// Upserting never duplicates names
    #[test]
    fn upsert_keeps_names_unique(names in prop::collection::vec("[a-c]\\.csv", 0..20)) {
        let mut state = DemoState::new();
        for name in &names {
            state.upsert_file(name, FileStatus::New);
        }
        let mut seen: Vec<&str> = state.files().iter().map(|f| f.name.as_str()).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), total);
        if let Some(last) = names.last() {
            prop_assert_eq!(&state.files()[0].name, last);
        }
    }
}

// =============================================================================
// Landing Property Tests
// =============================================================================

proptest! {
    /// Reveal progress never decreases and stays within bounds
    #[test]
    fn reveal_progress_monotonic(
        delay in 0.0f64..0.5,
        steps in prop::collection::vec(0u64..200, 1..60),
    ) {
        let mut reveal = Reveal::new(delay);
        reveal.observe(0, 3, 0, 20);
        let mut last = reveal.progress();
        for ms in steps {
            reveal.tick(Duration::from_millis(ms));
            let now = reveal.progress();
            prop_assert!(now + 1e-9 >= last);
            prop_assert!((0.0..=1.0).contains(&now));
            last = now;
        }
    }

    /// Once shown, a block never hides again
    #[test]
    fn reveal_is_one_shot(view_tops in prop::collection::vec(0u16..100, 1..20)) {
        let mut reveal = Reveal::new(0.0);
        reveal.observe(10, 3, 0, 20);
        for _ in 0..1000 {
            reveal.tick(Duration::from_millis(16));
        }
        prop_assert_eq!(reveal.phase(), RevealPhase::Shown);
        for top in view_tops {
            prop_assert!(!reveal.observe(10, 3, top, 20));
            prop_assert_eq!(reveal.phase(), RevealPhase::Shown);
        }
    }

    /// Landing scrolling stays within the page for any width and key sequence
    #[test]
    fn landing_scroll_in_bounds(
        width in 20u16..260,
        viewport in 5u16..60,
        moves in prop::collection::vec(0u8..6, 0..40),
    ) {
        let layout = landing::layout(width);
        let mut state = LandingState::new();
        state.sync(&layout, viewport);
        for m in moves {
            match m {
                0 => state.scroll_up(1),
                1 => state.scroll_down(3),
                2 => state.page_up(),
                3 => state.page_down(),
                4 => state.scroll_to_bottom(),
                _ => { state.activate(); }
            }
            prop_assert!(state.scroll() <= state.max_scroll());
        }
    }

    /// Every landing block is placed once, in document order, at any width
    #[test]
    fn landing_layout_complete(width in 20u16..260) {
        let layout = landing::layout(width);
        prop_assert_eq!(layout.placements.len(), merch::site::Slot::all().len());
        for p in &layout.placements {
            prop_assert!(p.top + p.height <= layout.height);
        }
    }
}

// =============================================================================
// Prompt Input Property Tests
// =============================================================================

proptest! {
    /// Arbitrary edits keep the cursor within the text
    #[test]
    fn prompt_cursor_in_range(ops in prop::collection::vec((0u8..7, any::<char>()), 0..60)) {
        let mut input = PromptInput::new();
        for (op, c) in ops {
            match op {
                0 | 1 => input.insert(c),
                2 => input.backspace(),
                3 => input.delete(),
                4 => input.move_left(),
                5 => input.move_right(),
                _ => input.move_home(),
            }
            prop_assert!(input.cursor() <= input.value().chars().count());
        }
    }
}

//! The scripted run as an explicit list of timed transitions
//!
//! A run is computed up front: every [`DemoEvent`] carries the delay to wait
//! before it is applied. Jitter is drawn once, while building, so the same
//! seed always yields the same timeline.
//!
//! ```text
//! thinking -> RevealSteps
//!   0      -> StartStep(0)    work -> CompleteStep(0)
//!   pause  -> StartStep(1)    work -> CompleteStep(1)
//!   ...
//!   pause  -> AppendChunk     interval -> AppendChunk ... interval -> Finish
//! ```

use super::script::{self, FINAL_RESPONSE};
use crate::config_file::{DemoConfig, Timing};
use rand::Rng;
use std::time::Duration;

/// One transition of a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    /// Thinking is over; show the steps
    RevealSteps,
    /// Mark a step running and surface its sources
    StartStep(usize),
    /// Apply a step's file action and mark it completed
    CompleteStep(usize),
    /// Append a piece of the response
    AppendChunk(String),
    /// Stop streaming and accept submissions again
    Finish,
}

/// An event and the delay that precedes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub delay: Duration,
    pub event: DemoEvent,
}

/// The full, ordered list of transitions for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimedEvent>,
}

impl Timeline {
    /// Build the timeline for one run, drawing step jitter from `rng`
    pub fn build<R: Rng>(config: &DemoConfig, rng: &mut R) -> Self {
        let timing = &config.timing;
        let mut entries = Vec::new();
        let mut push = |delay: Duration, event: DemoEvent| {
            entries.push(TimedEvent { delay, event });
        };

        push(timing.thinking(), DemoEvent::RevealSteps);

        for index in 0..script::STEP_COUNT {
            let lead = if index == 0 {
                Duration::ZERO
            } else {
                timing.step_pause()
            };
            push(lead, DemoEvent::StartStep(index));
            push(step_work(timing, rng), DemoEvent::CompleteStep(index));
        }

        let chunks = response_chunks(FINAL_RESPONSE, config.chunk_size);
        for (i, chunk) in chunks.into_iter().enumerate() {
            let lead = if i == 0 {
                timing.step_pause()
            } else {
                timing.chunk_interval()
            };
            push(lead, DemoEvent::AppendChunk(chunk));
        }
        push(timing.chunk_interval(), DemoEvent::Finish);

        Self { entries }
    }

    pub fn entries(&self) -> &[TimedEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every delay, i.e. how long the run takes to play
    pub fn total_duration(&self) -> Duration {
        self.entries.iter().map(|e| e.delay).sum()
    }

    pub fn into_entries(self) -> Vec<TimedEvent> {
        self.entries
    }
}

/// Simulated work for one step: fixed base plus uniform jitter in `[0, max)`
fn step_work<R: Rng>(timing: &Timing, rng: &mut R) -> Duration {
    let jitter = if timing.step_jitter_ms == 0 {
        0
    } else {
        rng.random_range(0..timing.step_jitter_ms)
    };
    Duration::from_millis(timing.step_base_ms + jitter)
}

/// Split `text` into pieces of `size` characters; the last may be shorter
pub fn response_chunks(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size).map(|c| c.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_chunks_reassemble() {
        let chunks = response_chunks("abcdefg", 3);
        assert_eq!(chunks, vec!["abc", "def", "g"]);
        assert_eq!(chunks.concat(), "abcdefg");
    }

    #[test]
    fn test_chunks_respect_char_boundaries() {
        let chunks = response_chunks("héllo🚀!", 2);
        assert_eq!(chunks, vec!["hé", "ll", "o🚀", "!"]);
    }

    #[test]
    fn test_zero_chunk_size_treated_as_one() {
        assert_eq!(response_chunks("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_same_seed_same_timeline() {
        let config = DemoConfig::default();
        let a = Timeline::build(&config, &mut StdRng::seed_from_u64(42));
        let b = Timeline::build(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_work_within_bounds() {
        let config = DemoConfig::default();
        let timeline = Timeline::build(&config, &mut StdRng::seed_from_u64(1));
        for entry in timeline.entries() {
            if let DemoEvent::CompleteStep(_) = entry.event {
                assert!(entry.delay >= Duration::from_millis(800));
                assert!(entry.delay < Duration::from_millis(1300));
            }
        }
    }

    #[test]
    fn test_first_event_waits_for_thinking() {
        let config = DemoConfig::default();
        let timeline = Timeline::build(&config, &mut StdRng::seed_from_u64(0));
        let first = &timeline.entries()[0];
        assert_eq!(first.event, DemoEvent::RevealSteps);
        assert_eq!(first.delay, Duration::from_millis(3500));
    }
}

//! Scripted research-agent demo
//!
//! # Module Structure
//! - `model` - Chat messages, steps, file and source records
//! - `script` - The fixed five-step script and response text
//! - `state` - `DemoState` and its update functions
//! - `timeline` - The run as a precomputed list of timed transitions
//! - `runner` - Worker thread that plays a timeline
//!
//! [`DemoSession`] ties them together: it accepts a prompt, builds the
//! timeline, starts the runner, and applies arriving events to the state.

pub mod model;
pub mod runner;
pub mod script;
pub mod state;
pub mod timeline;

pub use model::{ChatMessage, FileAction, FileRecord, ProcessStep, SourceRecord};
pub use runner::DemoRunner;
pub use state::{DemoState, StepTransitionError, SubmitError};
pub use timeline::{DemoEvent, TimedEvent, Timeline};

use crate::config_file::DemoConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// A demo session: state plus the run currently playing, if any
pub struct DemoSession {
    state: DemoState,
    config: DemoConfig,
    rng: StdRng,
    runner: Option<DemoRunner>,
}

impl DemoSession {
    pub fn new(config: DemoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: DemoState::new(),
            config,
            rng,
            runner: None,
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    /// Submit a prompt and start playing the script.
    ///
    /// Rejected submissions leave the session untouched.
    pub fn submit(&mut self, prompt: &str) -> Result<(), SubmitError> {
        self.state.submit(prompt)?;
        let timeline = Timeline::build(&self.config, &mut self.rng);
        info!(
            events = timeline.len(),
            duration_ms = timeline.total_duration().as_millis() as u64,
            "Playing research script"
        );
        self.runner = Some(DemoRunner::spawn(timeline));
        Ok(())
    }

    /// Apply every event that has arrived; returns the applied events
    pub fn pump(&mut self) -> Vec<DemoEvent> {
        let Some(runner) = self.runner.as_mut() else {
            return Vec::new();
        };
        let events = runner.poll();
        let finished = runner.is_finished();
        for event in &events {
            self.apply(event);
        }
        if finished {
            self.runner = None;
        }
        events
    }

    /// Wait for and apply the next event; `None` once the run is over
    pub fn next_blocking(&mut self) -> Option<DemoEvent> {
        let runner = self.runner.as_mut()?;
        match runner.next_blocking() {
            Some(event) => {
                self.apply(&event);
                Some(event)
            }
            None => {
                self.runner = None;
                None
            }
        }
    }

    fn apply(&mut self, event: &DemoEvent) {
        if let Err(e) = self.state.apply(event) {
            warn!("Ignoring demo event {:?}: {}", event, e);
        }
    }
}

//! Merch AI library
//!
//! The marketing site and the scripted research-agent demo as a terminal
//! UI, plus headless playback of the same script.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod demo;
pub mod error;
pub mod input;
pub mod playback;
pub mod site;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use config_file::{DemoConfig, Timing};
pub use demo::{DemoEvent, DemoSession, DemoState, StepTransitionError, SubmitError, Timeline};
pub use error::MerchError;
pub use playback::{play, PlaybackSummary};
pub use site::{LandingAction, LandingState, Reveal};
pub use types::{FileActionKind, FileStatus, Role, SourceKind, StepStatus};

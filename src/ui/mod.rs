//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Logo header, view tabs, nav bar and help overlay entry
//! - `landing` - Scrollable marketing page with reveal-on-scroll blocks
//! - `demo` - Files, transcript and sources panels with the prompt line
//! - `markdown` - Assistant response text to styled lines

mod header;
pub mod demo;
pub mod landing;
pub mod markdown;

pub use header::HeaderRenderer;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::demo::DemoState;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

/// Main UI renderer
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current view
    ///
    /// Takes `state` mutably because rendering measures the page and feeds
    /// the measured sizes back into the scroll and reveal state.
    pub fn render(
        &self,
        f: &mut Frame,
        state: &mut AppState,
        demo: &DemoState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let [content_area, nav_bar_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
        ])
        .areas(f.area());

        match state.mode {
            AppMode::Landing => {
                landing::render_landing(f, &mut state.landing, content_area, &self.header);
            }
            AppMode::Demo => {
                demo::render_demo(f, state, demo, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state.mode, keybinding_ctx, nav_bar_area);

        if state.help_visible {
            header::render_help_overlay(f, state.mode, keybinding_ctx);
        }
    }
}

//! Application module
//!
//! Contains the main application loop, view state and key handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, PanelScroll)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, PanelScroll};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::DemoConfig;
use crate::demo::DemoSession;
use crate::error::Result;
use crate::input::InputResult;
use crate::site::LandingAction;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    session: DemoSession,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution, nav bar and help
    keybinding_context: KeybindingContext,
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    ///
    /// The prompt line starts with `prompt`, or the configured default
    /// prompt when none is given.
    pub fn new(config: DemoConfig, mode: AppMode, prompt: Option<String>) -> Self {
        info!(?mode, "Creating new App instance");
        let prompt = prompt.unwrap_or_else(|| config.default_prompt.clone());

        let mut state = AppState {
            mode,
            ..AppState::default()
        };
        state.input = crate::input::PromptInput::with_value(&prompt);

        Self {
            state,
            session: DemoSession::new(config),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &DemoSession {
        &self.session
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Advance everything time-driven: demo events, reveals and spinners
    pub fn tick(&mut self, dt: Duration) {
        let events = self.session.pump();
        if !events.is_empty() {
            debug!(count = events.len(), "Applied demo events");
            self.state.transcript.follow_bottom();
            self.state.sources.follow_bottom();
        }
        self.state.landing.tick(dt);
        self.state.frame = self.state.frame.wrapping_add(1);
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("Starting main application loop");
        self.last_tick = Instant::now();

        loop {
            let now = Instant::now();
            self.tick(now.duration_since(self.last_tick));
            self.last_tick = now;

            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break; // Exit requested
                    }
                }
            }

            // Render UI
            terminal.draw(|f| {
                self.ui_renderer.render(
                    f,
                    &mut self.state,
                    self.session.state(),
                    &self.keybinding_context,
                );
            })?;
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle a key event; returns `true` when the user asked to quit
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        let mode = self.state.mode;
        let action = self.keybinding_context.resolve(&mode, &key_event);

        // Help overlay swallows everything except quit and its close keys
        if self.state.help_visible {
            match (action, key_event.code) {
                (Some(KeyAction::Quit), _) => return true,
                (Some(KeyAction::Help), _)
                | (_, KeyCode::Esc)
                | (_, KeyCode::F(1))
                | (_, KeyCode::Char('?')) => self.state.help_visible = false,
                _ => {}
            }
            return false;
        }

        match action {
            Some(action) => self.handle_action(action),
            None => {
                if mode == AppMode::Demo {
                    self.handle_prompt_key(key_event);
                }
                false
            }
        }
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, mode = ?self.state.mode, "Key action");
        let landing = self.state.mode == AppMode::Landing;

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                return true;
            }
            KeyAction::Help => self.toggle_help(),
            KeyAction::SwitchView => self.switch_to(self.state.mode.toggled()),
            KeyAction::OpenDemo => self.switch_to(AppMode::Demo),
            KeyAction::Back => self.switch_to(AppMode::Landing),
            KeyAction::ScrollUp if landing => self.state.landing.scroll_up(1),
            KeyAction::ScrollUp => self.state.transcript.scroll_up(1),
            KeyAction::ScrollDown if landing => self.state.landing.scroll_down(1),
            KeyAction::ScrollDown => self.state.transcript.scroll_down(1),
            KeyAction::PageUp if landing => self.state.landing.page_up(),
            KeyAction::PageUp => self.state.transcript.page_up(),
            KeyAction::PageDown if landing => self.state.landing.page_down(),
            KeyAction::PageDown => self.state.transcript.page_down(),
            KeyAction::SourcesUp => self.state.sources.scroll_up(1),
            KeyAction::SourcesDown => self.state.sources.scroll_down(1),
            KeyAction::Home => self.state.landing.scroll_to_top(),
            KeyAction::End => self.state.landing.scroll_to_bottom(),
            KeyAction::SelectPrevious => self.state.landing.select_previous(),
            KeyAction::SelectNext => self.state.landing.select_next(),
            KeyAction::Activate => {
                let chosen = self.state.landing.activate();
                info!(action = chosen.label(), "Landing action activated");
                if chosen == LandingAction::TryDemo {
                    self.switch_to(AppMode::Demo);
                }
            }
            KeyAction::Submit => self.submit_prompt(),
        }
        false
    }

    fn switch_to(&mut self, mode: AppMode) {
        if self.state.mode != mode {
            info!(from = ?self.state.mode, to = ?mode, "Switching view");
            self.state.mode = mode;
        }
    }

    fn submit_prompt(&mut self) {
        match self.session.submit(self.state.input.value()) {
            Ok(()) => {
                let prompt = self.state.input.take();
                info!(chars = prompt.chars().count(), "Prompt submitted");
                self.state.transcript.follow_bottom();
            }
            Err(e) => warn!("Prompt not submitted: {}", e),
        }
    }

    fn handle_prompt_key(&mut self, key_event: KeyEvent) {
        match self.state.input.handle_input(key_event) {
            InputResult::Confirm(_) => self.submit_prompt(),
            InputResult::Cancel => self.switch_to(AppMode::Landing),
            InputResult::Continue => {}
        }
    }
}

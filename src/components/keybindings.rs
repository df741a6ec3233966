//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The same registry resolves key events to actions,
//! fills the navigation bar and builds the help overlay.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    SourcesUp,
    SourcesDown,
    Home,
    End,
    SelectPrevious,
    SelectNext,
    Activate,
    OpenDemo,
    Submit,
    Back,
    SwitchView,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding. Shift is ignored so that
    /// shifted characters such as `?` match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let relevant = event.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        self.key == event.code && relevant == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchView, "Tab", "Switch view"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Landing,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to top"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to bottom"),
                Keybinding::new(KeyCode::Left, KeyAction::SelectPrevious, "Left", "Previous button"),
                Keybinding::new(KeyCode::Right, KeyAction::SelectNext, "Right", "Next button"),
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Press button"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::OpenDemo, "D", "Open demo"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // Printable keys and Left/Right/Home/End go to the prompt line
        self.mode_bindings.insert(
            AppMode::Demo,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll transcript up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll transcript down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::with_modifiers(
                    KeyCode::Up,
                    KeyModifiers::ALT,
                    KeyAction::SourcesUp,
                    "Alt+Up",
                    "Scroll sources up",
                ),
                Keybinding::with_modifiers(
                    KeyCode::Down,
                    KeyModifiers::ALT,
                    KeyAction::SourcesDown,
                    "Alt+Down",
                    "Scroll sources down",
                ),
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Send prompt"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to home"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to the action bound to it in `mode`
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Landing => vec![
                KeyAction::ScrollUp,
                KeyAction::ScrollDown,
                KeyAction::SelectPrevious,
                KeyAction::SelectNext,
                KeyAction::Activate,
                KeyAction::OpenDemo,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Demo => vec![
                KeyAction::Submit,
                KeyAction::ScrollUp,
                KeyAction::ScrollDown,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // Combine Up/Down and Left/Right into single items
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_scroll = false;
        let mut has_select = false;

        for action in priority_actions {
            let is_scroll = matches!(action, KeyAction::ScrollUp | KeyAction::ScrollDown);
            let is_select = matches!(action, KeyAction::SelectPrevious | KeyAction::SelectNext);
            if (is_scroll && has_scroll) || (is_select && has_select) {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if is_scroll {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Scroll".to_string(),
                    });
                    has_scroll = true;
                } else if is_select {
                    items.push(NavBarItem {
                        key_display: "Left/Right".to_string(),
                        action_label: "Select".to_string(),
                    });
                    has_select = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::SourcesUp
                        | KeyAction::SourcesDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::SelectPrevious
                        | KeyAction::SelectNext
                )
            }),
            ("Actions", |a| {
                matches!(a, KeyAction::Activate | KeyAction::OpenDemo | KeyAction::Submit)
            }),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::Back | KeyAction::SwitchView | KeyAction::Help | KeyAction::Quit
                )
            }),
        ];

        let bindings = self.get_bindings(mode);
        let mut sections: Vec<HelpSection> = groups
            .iter()
            .map(|(title, belongs)| HelpSection {
                title: title.to_string(),
                items: bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect(),
            })
            .filter(|section| !section.items.is_empty())
            .collect();

        if *mode == AppMode::Demo {
            sections.push(HelpSection {
                title: "Prompt".to_string(),
                items: vec![
                    ("Type".to_string(), "Edit the prompt".to_string()),
                    ("Left/Right".to_string(), "Move cursor".to_string()),
                    ("Home/End".to_string(), "Start / end of line".to_string()),
                    ("Ctrl+U".to_string(), "Clear the prompt".to_string()),
                ],
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

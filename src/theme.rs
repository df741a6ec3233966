//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used by the landing and demo views. Render code
//! never constructs colors inline.
//!
//! # Usage
//! ```rust
//! use merch::theme::{Colors, Styles, Theme};
//! use merch::types::FileStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::ACCENT);
//! let title_style = Styles::title();
//! let badge = Theme::file_status_style(FileStatus::New);
//! ```

use crate::types::{FileActionKind, FileStatus, SourceKind, StepStatus};
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Page background
    pub const BG_PRIMARY: Color = Color::Rgb(12, 12, 20);

    /// Card and panel background
    pub const BG_SECONDARY: Color = Color::Rgb(24, 24, 36);

    /// Highlighted card background
    pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 36, 84);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/body text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Brand accent (indigo)
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);

    /// Lighter accent for gradient-style emphasis
    pub const ACCENT_LIGHT: Color = Color::Rgb(165, 180, 252);

    // -------------------------------------------------------------------------
    // Semantic Colors (status, badges)
    // -------------------------------------------------------------------------

    /// `NEW` file badge and completed steps
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);

    /// `UPDATED` file badge
    pub const UPDATED: Color = Color::Rgb(59, 130, 246);

    /// Running step
    pub const RUNNING: Color = Color::Rgb(250, 204, 21);

    // -------------------------------------------------------------------------
    // Source Category Colors
    // -------------------------------------------------------------------------

    pub const SOURCE_WEB: Color = Color::Rgb(59, 130, 246);
    pub const SOURCE_REDDIT: Color = Color::Rgb(249, 115, 22);
    pub const SOURCE_X: Color = Color::Rgb(125, 211, 252);
    pub const SOURCE_DATABASE: Color = Color::Rgb(168, 85, 247);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(99, 102, 241);

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected button background
    pub const SELECTED_BG: Color = Color::Rgb(99, 102, 241);

    /// Selected button text
    pub const SELECTED_FG: Color = Color::White;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    // -------------------------------------------------------------------------
    // Text Styles
    // -------------------------------------------------------------------------

    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent-colored emphasis inside headings
    pub fn accent() -> Style {
        Style::default()
            .fg(Colors::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Title/Header Styles
    // -------------------------------------------------------------------------

    /// Main title style (white, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Border/Block Styles
    // -------------------------------------------------------------------------

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn card_bg() -> Style {
        Style::default().bg(Colors::BG_SECONDARY)
    }

    pub fn card_highlight_bg() -> Style {
        Style::default().bg(Colors::BG_HIGHLIGHT)
    }

    // -------------------------------------------------------------------------
    // Button Styles
    // -------------------------------------------------------------------------

    /// Active/selected button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive button
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::ACCENT_LIGHT)
    }

    /// Disabled button (submit while processing or with empty input)
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    // -------------------------------------------------------------------------
    // Chat Styles
    // -------------------------------------------------------------------------

    pub fn user_message() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_HIGHLIGHT)
    }

    pub fn assistant_message() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn inline_code() -> Style {
        Style::default()
            .fg(Colors::ACCENT_LIGHT)
            .bg(Colors::BG_SECONDARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups for demo state
pub struct Theme;

impl Theme {
    /// Style for a step's status glyph and title
    pub fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Pending => Style::default().fg(Colors::FG_MUTED),
            StepStatus::Running => Style::default()
                .fg(Colors::RUNNING)
                .add_modifier(Modifier::BOLD),
            StepStatus::Completed => Style::default().fg(Colors::SUCCESS),
        }
    }

    pub fn file_status_color(status: FileStatus) -> Color {
        match status {
            FileStatus::New => Colors::SUCCESS,
            FileStatus::Updated => Colors::UPDATED,
        }
    }

    /// Badge style for a file record
    pub fn file_status_style(status: FileStatus) -> Style {
        Style::default()
            .fg(Colors::BG_PRIMARY)
            .bg(Self::file_status_color(status))
            .add_modifier(Modifier::BOLD)
    }

    /// Badge style for a step's file action
    pub fn file_action_style(kind: FileActionKind) -> Style {
        Self::file_status_style(kind.resulting_status())
    }

    pub fn source_color(kind: SourceKind) -> Color {
        match kind {
            SourceKind::Web => Colors::SOURCE_WEB,
            SourceKind::Reddit => Colors::SOURCE_REDDIT,
            SourceKind::X => Colors::SOURCE_X,
            SourceKind::Database => Colors::SOURCE_DATABASE,
        }
    }

    /// Glyph shown before a source record
    pub fn source_icon(kind: SourceKind) -> &'static str {
        match kind {
            SourceKind::Web => "◍",
            SourceKind::Reddit => "●",
            SourceKind::X => "𝕏",
            SourceKind::Database => "▤",
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header height (with ASCII art)
    pub const HEADER_HEIGHT: u16 = 3;

    /// Landing width below which card rows stack
    pub const STACK_BELOW_WIDTH: u16 = 80;

    /// Landing width from which pricing uses four columns
    pub const WIDE_FROM_WIDTH: u16 = 120;

    /// Side panel width in the demo view
    pub const SIDE_PANEL_WIDTH: u16 = 30;

    /// Spinner frames for running steps and the busy submit control
    pub const SPINNER: [&'static str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const AGENT_NAME: &'static str = "Merch Agent";
    pub const AGENT_STATUS: &'static str = "Online & Ready";
    pub const FILES_TITLE: &'static str = "Organized Insights";
    pub const SOURCES_TITLE: &'static str = "Sources";

    pub const EMPTY_CHAT: &'static str = "Ask me to research, analyze, or generate content.";
    pub const EMPTY_FILES: &'static str = "No files generated yet.";
    pub const EMPTY_SOURCES: &'static str = "No sources analyzed yet.";
    pub const THINKING: &'static str = "Thinking...";

    pub const BTN_SUBMIT: &'static str = " Send ";
    pub const PROMPT_PLACEHOLDER: &'static str = "Ask Merch to research something...";
}

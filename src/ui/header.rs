//! Header and common widget rendering
//!
//! This module contains the logo header, the bottom navigation bar and
//! the help overlay entry point.

use crate::app::AppMode;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::site::content::BRAND;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header renderer containing the logo and view tabs
pub struct HeaderRenderer {
    /// Logo lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the logo with the view tabs underneath
    pub fn render_header(&self, f: &mut Frame, area: Rect, mode: AppMode) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines = self.header_lines.clone();
        lines.push(tabs_line(mode));
        let header = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Create the logo header
    fn create_header() -> Vec<Line<'static>> {
        let logo = Style::default().fg(Colors::ACCENT);
        vec![
            Line::from(vec![
                Span::styled("█▀▄▀█ █▀▀ █▀█ █▀▀ █ █", logo),
                Span::styled("  ▄▀█ █", Styles::accent()),
            ]),
            Line::from(vec![
                Span::styled("█ ▀ █ ██▄ █▀▄ █▄▄ █▀█", logo),
                Span::styled("  █▀█ █", Styles::accent()),
            ]),
        ]
    }
}

fn tabs_line(mode: AppMode) -> Line<'static> {
    let tab = |m: AppMode| {
        let style = if m == mode {
            Styles::button_active()
        } else {
            Styles::text_muted()
        };
        Span::styled(format!(" {} ", m.title()), style)
    };
    Line::from(vec![tab(AppMode::Landing), Span::raw("  "), tab(AppMode::Demo)])
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, mode: AppMode, keybinding_ctx: &KeybindingContext, area: Rect) {
    let mut spans = vec![Span::styled(format!(" {} ", BRAND), Styles::button_active())];
    for item in keybinding_ctx.get_nav_items(&mode) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(item.key_display, Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, mode: AppMode, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}

//! Help overlay component
//!
//! Displays context-sensitive help in a centered window over the current view.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH_PERCENT: u16 = 60;
const MIN_WIDTH: u16 = 44;
const MAX_WIDTH: u16 = 72;
const FOOTER: &str = "Press F1, ? or Esc to close";

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Merch AI Help  ",
            Styles::header(),
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(mode.title().to_string(), Styles::accent()),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<12}", key), Styles::nav_key()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered(parent, self.content.len() as u16 + 2);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(FOOTER).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}

fn centered(parent: Rect, content_height: u16) -> Rect {
    let width = ((u32::from(parent.width) * u32::from(WIDTH_PERCENT) / 100) as u16)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(parent.width);
    let height = content_height.min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

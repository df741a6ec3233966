//! Markdown to ratatui lines
//!
//! Covers what the assistant response uses: paragraphs, headings, bold,
//! italic, inline code and nested bullet or numbered lists. Partial input
//! (mid-stream) renders fine; unclosed markers simply show as text.

use crate::theme::Styles;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

struct LineBuilder {
    base: Style,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    heading: bool,
    /// `None` for bullet lists, next number for ordered lists
    lists: Vec<Option<u64>>,
    /// The current line holds only a list marker so far
    marker_only: bool,
    needs_gap: bool,
}

impl LineBuilder {
    fn new(base: Style) -> Self {
        Self {
            base,
            lines: Vec::new(),
            current: Vec::new(),
            bold: 0,
            italic: 0,
            heading: false,
            lists: Vec::new(),
            marker_only: false,
            needs_gap: false,
        }
    }

    fn style(&self) -> Style {
        let mut style = self.base;
        if self.bold > 0 || self.heading {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
        self.marker_only = false;
    }

    /// Start a top-level block, separated from the previous one by a blank line
    fn open_block(&mut self) {
        self.flush();
        if self.needs_gap && self.lists.is_empty() {
            self.lines.push(Line::from(""));
        }
        self.needs_gap = false;
    }

    fn indent(&self) -> String {
        "  ".repeat(self.lists.len().saturating_sub(1))
    }

    fn push_text(&mut self, text: &str) {
        self.marker_only = false;
        let style = self.style();
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if !self.marker_only {
                        self.open_block();
                    }
                }
                Tag::Heading { .. } => {
                    self.open_block();
                    self.heading = true;
                }
                Tag::List(start) => {
                    if self.lists.is_empty() {
                        self.open_block();
                    } else {
                        self.flush();
                    }
                    self.lists.push(start);
                }
                Tag::Item => {
                    self.flush();
                    let marker = match self.lists.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{}. ", n);
                            *n += 1;
                            marker
                        }
                        _ => "• ".to_string(),
                    };
                    let indent = self.indent();
                    self.current.push(Span::styled(
                        format!("{}{}", indent, marker),
                        Styles::accent(),
                    ));
                    self.marker_only = true;
                }
                Tag::Strong => self.bold += 1,
                Tag::Emphasis => self.italic += 1,
                Tag::CodeBlock(_) => self.open_block(),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Paragraph => {
                    if self.lists.is_empty() {
                        self.flush();
                        self.needs_gap = true;
                    }
                }
                TagEnd::Heading(_) => {
                    self.heading = false;
                    self.flush();
                    self.needs_gap = true;
                }
                TagEnd::List(_) => {
                    self.flush();
                    self.lists.pop();
                    if self.lists.is_empty() {
                        self.needs_gap = true;
                    }
                }
                TagEnd::Item => self.flush(),
                TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
                TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
                TagEnd::CodeBlock => {
                    self.flush();
                    self.needs_gap = true;
                }
                _ => {}
            },
            Event::Text(text) => {
                let mut parts = text.split('\n').peekable();
                while let Some(part) = parts.next() {
                    if !part.is_empty() {
                        self.push_text(part);
                    }
                    if parts.peek().is_some() {
                        self.flush();
                    }
                }
            }
            Event::Code(code) => {
                self.marker_only = false;
                self.current
                    .push(Span::styled(code.to_string(), Styles::inline_code()));
            }
            Event::SoftBreak | Event::HardBreak => {
                self.flush();
                if !self.lists.is_empty() {
                    let indent = format!("{}  ", self.indent());
                    self.current.push(Span::raw(indent));
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }
}

/// Render `text` as styled lines, using `base` for plain text
pub fn render_markdown(text: &str, base: Style) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(base);
    for event in Parser::new_ext(text, Options::empty()) {
        builder.handle(event);
    }
    builder.finish()
}

//! Demo view rendering
//!
//! Three panels: generated files on the left, the agent transcript with the
//! prompt line in the middle, discovered sources on the right. Side panels
//! are dropped on narrow terminals.

use super::header::HeaderRenderer;
use super::markdown::render_markdown;
use crate::app::{AppMode, AppState, PanelScroll};
use crate::demo::{ChatMessage, DemoState, FileRecord, ProcessStep, SourceRecord};
use crate::theme::{Colors, Styles, Theme, UiConstants, UiText};
use crate::types::StepStatus;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Wrap,
    },
    Frame,
};

/// Narrowest terminal that still shows the side panels
const SIDE_PANELS_FROM_WIDTH: u16 = 90;
const INPUT_HEIGHT: u16 = 3;

fn spinner(frame: usize) -> &'static str {
    UiConstants::SPINNER[frame % UiConstants::SPINNER.len()]
}

fn panel(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_inactive())
        .title(Span::styled(format!(" {} ", title), Styles::title()))
        .padding(Padding::horizontal(1))
}

fn empty_state(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, Styles::text_muted())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Lines for one step: glyph and title, subtext, then URL and file badge
/// once the step has started
fn step_lines(step: &ProcessStep, frame: usize) -> Vec<Line<'static>> {
    let style = Theme::step_style(step.status);
    let glyph = match step.status {
        StepStatus::Pending => "○",
        StepStatus::Running => spinner(frame),
        StepStatus::Completed => "✓",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph), style),
            Span::styled(step.title.clone(), style),
        ]),
        Line::from(Span::styled(
            format!("  {}", step.subtext),
            Styles::text_muted(),
        )),
    ];

    if step.status != StepStatus::Pending {
        if let Some(url) = &step.url {
            lines.push(Line::from(Span::styled(
                format!("  ↳ {}", url),
                Styles::text_secondary(),
            )));
        }
        if let Some(action) = &step.file_action {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", action.kind.to_string().to_uppercase()),
                    Theme::file_action_style(action.kind),
                ),
                Span::styled(format!(" {}", action.file_name), Styles::text()),
            ]));
        }
    }
    lines
}

fn message_lines(message: &ChatMessage, frame: usize) -> Vec<Line<'static>> {
    if message.is_user() {
        return vec![
            Line::from(Span::styled(
                format!(" {} ", message.content),
                Styles::user_message(),
            ))
            .alignment(Alignment::Right),
        ];
    }

    let mut lines = vec![Line::from(Span::styled(
        format!("◆ {}", UiText::AGENT_NAME),
        Styles::accent(),
    ))];

    if message.is_thinking {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner(frame)), Style::default().fg(Colors::RUNNING)),
            Span::styled(UiText::THINKING, Styles::text_muted()),
        ]));
        return lines;
    }

    for step in message.steps() {
        lines.extend(step_lines(step, frame));
    }

    if !message.content.is_empty() {
        lines.push(Line::from(""));
        let mut body = render_markdown(&message.content, Styles::assistant_message());
        if message.is_streaming {
            match body.last_mut() {
                Some(last) => last.spans.push(Span::styled("▌", Styles::accent())),
                None => body.push(Line::from(Span::styled("▌", Styles::accent()))),
            }
        }
        lines.extend(body);
    }
    lines
}

/// The whole transcript as lines, oldest message first
pub fn transcript_lines(demo: &DemoState, frame: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, message) in demo.chats().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(message_lines(message, frame));
    }
    lines
}

fn file_lines(file: &FileRecord) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("▤ ", Styles::accent()),
            Span::styled(file.name.clone(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled(format!("  {} ", file.file_type.to_uppercase()), Styles::text_muted()),
            Span::styled(
                format!(" {} ", file.status.to_string().to_uppercase()),
                Theme::file_status_style(file.status),
            ),
        ]),
    ]
}

fn source_lines(source: &SourceRecord) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", Theme::source_icon(source.kind)),
            Style::default().fg(Theme::source_color(source.kind)),
        ),
        Span::styled(source.title.clone(), Styles::text()),
    ])];
    if let Some(url) = source.display_url() {
        lines.push(Line::from(Span::styled(
            format!("  {}", url),
            Styles::text_muted(),
        )));
    }
    lines
}

fn render_files(f: &mut Frame, demo: &DemoState, area: Rect) {
    let block = panel(UiText::FILES_TITLE);
    if demo.files().is_empty() {
        f.render_widget(empty_state(UiText::EMPTY_FILES).block(block), area);
        return;
    }
    let lines: Vec<Line> = demo
        .files()
        .iter()
        .flat_map(|file| {
            let mut lines = file_lines(file);
            lines.push(Line::from(""));
            lines
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_sources(f: &mut Frame, scroll: &mut PanelScroll, demo: &DemoState, area: Rect) {
    let title = format!("{} ({})", UiText::SOURCES_TITLE, demo.sources().len());
    let block = panel(&title);
    if demo.sources().is_empty() {
        scroll.sync(0, area.height);
        f.render_widget(empty_state(UiText::EMPTY_SOURCES).block(block), area);
        return;
    }
    let lines: Vec<Line> = demo
        .sources()
        .iter()
        .flat_map(|source| {
            let mut lines = source_lines(source);
            lines.push(Line::from(""));
            lines
        })
        .collect();
    let inner = block.inner(area);
    f.render_widget(block, area);
    render_following(f, lines, inner, scroll);
}

/// Rows `paragraph` takes at `width`, saturating at `u16::MAX`
fn wrapped_rows(paragraph: &Paragraph, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}

/// Wrapped lines scrolled by `scroll`, with a scrollbar in the last column
/// once they overflow `area`
fn render_following(f: &mut Frame, lines: Vec<Line<'static>>, area: Rect, scroll: &mut PanelScroll) {
    let text_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total_rows = wrapped_rows(&paragraph, text_area.width);
    scroll.sync(total_rows, area.height);

    let offset = scroll.offset();
    f.render_widget(paragraph.scroll((offset, 0)), text_area);

    if total_rows > area.height {
        let max_scroll = total_rows.saturating_sub(area.height);
        let mut scrollbar_state = ScrollbarState::new(max_scroll as usize).position(offset as usize);
        let scrollbar =
            Scrollbar::new(ScrollbarOrientation::VerticalRight).style(Styles::border_inactive());
        f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn render_transcript(f: &mut Frame, state: &mut AppState, demo: &DemoState, area: Rect) {
    if demo.chats().is_empty() {
        state.transcript.sync(0, area.height);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(area);
        f.render_widget(empty_state(UiText::EMPTY_CHAT), middle);
        return;
    }

    render_following(f, transcript_lines(demo, state.frame), area, &mut state.transcript);
}

/// The prompt line and its submit control; returns where the cursor goes
fn render_input(f: &mut Frame, state: &AppState, demo: &DemoState, area: Rect) -> Option<Position> {
    let processing = demo.is_processing();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if processing {
            Styles::border_inactive()
        } else {
            Styles::border_active()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let control = if processing {
        Span::styled(format!(" {} Working ", spinner(state.frame)), Styles::button_disabled())
    } else if demo.can_submit(state.input.value()) {
        Span::styled(UiText::BTN_SUBMIT, Styles::button_active())
    } else {
        Span::styled(UiText::BTN_SUBMIT, Styles::button_disabled())
    };
    let control_width = control.width() as u16;
    let [text_area, _, control_area] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(control_width),
    ])
    .areas(inner);
    f.render_widget(Paragraph::new(Line::from(control)), control_area);

    let value = state.input.value();
    if value.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(UiText::PROMPT_PLACEHOLDER, Styles::text_muted())),
            text_area,
        );
        return Some(Position::new(text_area.x, text_area.y));
    }

    // Scroll horizontally so the cursor stays visible
    let width = text_area.width.max(1) as usize;
    let cursor = state.input.cursor();
    let start = (cursor + 1).saturating_sub(width);
    let visible: String = value.chars().skip(start).take(width).collect();
    let style = if processing {
        Styles::text_muted()
    } else {
        Styles::text()
    };
    f.render_widget(Paragraph::new(Span::styled(visible, style)), text_area);
    Some(Position::new(text_area.x + (cursor - start) as u16, text_area.y))
}

/// Render the demo view
pub fn render_demo(
    f: &mut Frame,
    state: &mut AppState,
    demo: &DemoState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let [header_area, body] = Layout::vertical([
        Constraint::Length(UiConstants::HEADER_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(area);
    header.render_header(f, header_area, AppMode::Demo);

    let center = if body.width >= SIDE_PANELS_FROM_WIDTH {
        let [files, center, sources] = Layout::horizontal([
            Constraint::Length(UiConstants::SIDE_PANEL_WIDTH),
            Constraint::Min(20),
            Constraint::Length(UiConstants::SIDE_PANEL_WIDTH),
        ])
        .areas(body);
        render_files(f, demo, files);
        render_sources(f, &mut state.sources, demo, sources);
        center
    } else {
        body
    };

    let status = Line::from(vec![
        Span::styled("● ", Style::default().fg(Colors::SUCCESS)),
        Span::styled(UiText::AGENT_STATUS, Styles::text_muted()),
        Span::raw(" "),
    ])
    .alignment(Alignment::Right);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_active())
        .title(Span::styled(format!(" {} ", UiText::AGENT_NAME), Styles::title()))
        .title(status)
        .padding(Padding::horizontal(1));
    let inner = block.inner(center);
    f.render_widget(block, center);

    let [transcript_area, input_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(inner);

    render_transcript(f, state, demo, transcript_area);
    let cursor = render_input(f, state, demo, input_area);

    if !state.help_visible && !demo.is_processing() {
        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }
    }
}

//! Landing page rendering
//!
//! The page is laid out as rows of slots on a virtual canvas as tall as the
//! content. Each visible slot is drawn into its own buffer and copied onto
//! the frame, shifted by its reveal offset and dimmed while fading in.

use super::header::HeaderRenderer;
use crate::app::AppMode;
use crate::demo::script;
use crate::site::content::{self, Feature, Plan};
use crate::site::{LandingAction, LandingLayout, LandingState, Placement, Slot};
use crate::theme::{Styles, Theme, UiConstants, UiText};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Widget, Wrap,
    },
    Frame,
};

const MAX_PAGE_WIDTH: u16 = 140;
const COLUMN_GAP: u16 = 2;
const SECTION_GAP: u16 = 3;
const BOTTOM_PADDING: u16 = 2;

/// Rows above a slot, and the slots sharing its row
struct RowSpec {
    gap_before: u16,
    slots: Vec<Slot>,
}

struct Cell {
    slot: Slot,
    x: u16,
    width: u16,
}

struct Row {
    top: u16,
    height: u16,
    cells: Vec<Cell>,
}

/// What a slot draws
struct SlotView {
    lines: Vec<Line<'static>>,
    align: Alignment,
    chrome: Chrome,
}

/// Border and background around a slot
#[derive(Clone, Copy, PartialEq, Eq)]
enum Chrome {
    Plain,
    Card,
    Highlight,
}

fn row_specs(width: u16) -> Vec<RowSpec> {
    let single = |gap_before, slot| RowSpec {
        gap_before,
        slots: vec![slot],
    };
    let stacked = width < UiConstants::STACK_BELOW_WIDTH;
    let mut rows = vec![
        single(1, Slot::HeroTitle),
        single(1, Slot::HeroSubtitle),
        single(1, Slot::HeroActions),
        single(SECTION_GAP, Slot::FeaturesHeading),
    ];

    if stacked {
        rows.extend((0..content::FEATURES.len()).map(|i| single(1, Slot::Feature(i))));
    } else {
        let mut index = 0;
        for group in content::feature_rows() {
            rows.push(RowSpec {
                gap_before: 1,
                slots: (index..index + group.len()).map(Slot::Feature).collect(),
            });
            index += group.len();
        }
    }

    rows.push(single(SECTION_GAP, Slot::ActionTag));
    if stacked {
        rows.push(single(1, Slot::ActionTitle));
        rows.push(single(1, Slot::ActionPreview));
    } else {
        rows.push(RowSpec {
            gap_before: 1,
            slots: vec![Slot::ActionTitle, Slot::ActionPreview],
        });
    }

    rows.push(single(SECTION_GAP, Slot::CallToAction));
    rows.push(single(SECTION_GAP, Slot::PricingHeading));

    let per_row = if width >= UiConstants::WIDE_FROM_WIDTH {
        content::PLANS.len()
    } else if stacked {
        1
    } else {
        2
    };
    let plans: Vec<Slot> = (0..content::PLANS.len()).map(Slot::Plan).collect();
    for group in plans.chunks(per_row) {
        rows.push(RowSpec {
            gap_before: 1,
            slots: group.to_vec(),
        });
    }
    rows
}

fn arrange(width: u16) -> (Vec<Row>, u16) {
    let mut rows = Vec::new();
    let mut y: u16 = 0;

    for spec in row_specs(width) {
        y = y.saturating_add(spec.gap_before);
        let n = spec.slots.len() as u32;
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, n); spec.slots.len()])
            .spacing(COLUMN_GAP)
            .split(Rect::new(0, 0, width, 1));
        let cells: Vec<Cell> = spec
            .slots
            .iter()
            .zip(columns.iter())
            .map(|(slot, col)| Cell {
                slot: *slot,
                x: col.x,
                width: col.width,
            })
            .collect();
        let height = cells
            .iter()
            .map(|c| slot_height(c.slot, c.width))
            .max()
            .unwrap_or(0);
        rows.push(Row {
            top: y,
            height,
            cells,
        });
        y = y.saturating_add(height);
    }

    (rows, y.saturating_add(BOTTOM_PADDING))
}

fn page_width(area_width: u16) -> u16 {
    area_width.saturating_sub(2).min(MAX_PAGE_WIDTH)
}

fn to_layout(rows: &[Row], height: u16) -> LandingLayout {
    let placements = rows
        .iter()
        .flat_map(|row| {
            row.cells.iter().map(move |cell| Placement {
                slot: cell.slot,
                top: row.top,
                height: row.height,
            })
        })
        .collect();
    LandingLayout { placements, height }
}

/// Lay the page out for a body `width` columns wide
pub fn layout(width: u16) -> LandingLayout {
    let (rows, height) = arrange(page_width(width));
    to_layout(&rows, height)
}

fn slot_height(slot: Slot, width: u16) -> u16 {
    let view = slot_view(slot, None);
    let (chrome_w, chrome_h) = match view.chrome {
        Chrome::Plain => (0, 0),
        Chrome::Card | Chrome::Highlight => (4, 2),
    };
    let inner = width.saturating_sub(chrome_w).max(1);
    let body = Paragraph::new(view.lines)
        .wrap(Wrap { trim: false })
        .line_count(inner);
    (body as u16).saturating_add(chrome_h)
}

fn button(action: LandingAction, selected: Option<LandingAction>) -> Span<'static> {
    let style = if selected == Some(action) {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    Span::styled(format!("[ {} ]", action.label()), style)
}

fn feature_lines(feature: &Feature) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(feature.icon, Styles::accent())),
        Line::from(""),
        Line::from(Span::styled(feature.title, Styles::title())),
        Line::from(""),
        Line::from(Span::styled(feature.body, Styles::text_secondary())),
    ]
}

fn plan_lines(plan: &Plan) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if plan.highlight {
        lines.push(Line::from(Span::styled(
            format!(" {} ", content::HIGHLIGHT_BADGE.to_uppercase()),
            Styles::button_active(),
        )));
    }
    lines.push(Line::from(Span::styled(plan.name, Styles::title())));
    lines.push(Line::from(vec![
        Span::styled(plan.price, Styles::text_bold()),
        Span::styled(content::PRICE_SUFFIX, Styles::text_muted()),
    ]));
    lines.push(Line::from(Span::styled(plan.description, Styles::text_secondary())));
    lines.push(Line::from(""));
    for feature in plan.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Styles::accent()),
            Span::styled(*feature, Styles::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", content::PLAN_BUTTON),
        Styles::button_disabled(),
    )));
    lines
}

/// A miniature of the demo view standing in for a screenshot
fn preview_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(UiText::AGENT_NAME, Styles::title()),
            Span::styled(format!("  ● {}", UiText::AGENT_STATUS), Styles::text_muted()),
        ]),
        Line::from(""),
    ];
    for step in script::research_steps() {
        let mut spans = vec![
            Span::styled("✓ ", Styles::accent()),
            Span::styled(step.title, Styles::text()),
        ];
        if let Some(action) = step.file_action {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", action.file_name),
                Theme::file_action_style(action.kind),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn slot_view(slot: Slot, selected: Option<LandingAction>) -> SlotView {
    let centered = |lines| SlotView {
        lines,
        align: Alignment::Center,
        chrome: Chrome::Plain,
    };
    match slot {
        Slot::HeroTitle => centered(vec![Line::from(vec![
            Span::styled(content::HERO_TITLE_LEAD, Styles::title()),
            Span::styled(content::HERO_TITLE_ACCENT, Styles::accent()),
            Span::styled(content::HERO_TITLE_TAIL, Styles::title()),
        ])]),
        Slot::HeroSubtitle => centered(vec![Line::from(Span::styled(
            content::HERO_SUBTITLE,
            Styles::text_secondary(),
        ))]),
        Slot::HeroActions => centered(vec![Line::from(vec![
            button(LandingAction::GetStarted, selected),
            Span::raw("   "),
            button(LandingAction::LearnMore, selected),
        ])]),
        Slot::FeaturesHeading => centered(vec![Line::from(vec![
            Span::styled(content::FEATURES_HEADING_ACCENT, Styles::accent()),
            Span::styled(content::FEATURES_HEADING_TAIL, Styles::title()),
        ])]),
        Slot::Feature(i) => SlotView {
            lines: content::FEATURES.get(i).map(feature_lines).unwrap_or_default(),
            align: Alignment::Left,
            chrome: Chrome::Card,
        },
        Slot::ActionTag => SlotView {
            lines: vec![Line::from(vec![
                Span::styled("◖ ", Styles::border_inactive()),
                Span::styled(content::ACTION_TAG_LEAD, Styles::text()),
                Span::styled(content::ACTION_TAG_ACCENT, Styles::accent()),
                Span::styled(" ◗", Styles::border_inactive()),
            ])],
            align: Alignment::Left,
            chrome: Chrome::Plain,
        },
        Slot::ActionTitle => SlotView {
            lines: vec![
                Line::from(vec![
                    Span::styled(content::ACTION_TITLE_LEAD, Styles::title()),
                    Span::styled(content::ACTION_TITLE_ACCENT, Styles::accent()),
                    Span::styled(content::ACTION_TITLE_TAIL, Styles::title()),
                ]),
                Line::from(""),
                Line::from(button(LandingAction::TryDemo, selected)),
            ],
            align: Alignment::Left,
            chrome: Chrome::Plain,
        },
        Slot::ActionPreview => SlotView {
            lines: preview_lines(),
            align: Alignment::Left,
            chrome: Chrome::Card,
        },
        Slot::CallToAction => SlotView {
            lines: vec![
                Line::from(""),
                Line::from(Span::styled(content::CTA_TITLE, Styles::title())),
                Line::from(""),
                Line::from(button(LandingAction::GetMerch, selected)),
                Line::from(""),
            ],
            align: Alignment::Center,
            chrome: Chrome::Highlight,
        },
        Slot::PricingHeading => centered(vec![
            Line::from(vec![
                Span::styled(content::PRICING_HEADING_LEAD, Styles::title()),
                Span::styled(content::PRICING_HEADING_ACCENT, Styles::accent()),
            ]),
            Line::from(Span::styled(content::PRICING_SUBTITLE, Styles::text_muted())),
        ]),
        Slot::Plan(i) => {
            let plan = content::PLANS.get(i);
            SlotView {
                lines: plan.map(plan_lines).unwrap_or_default(),
                align: Alignment::Left,
                chrome: if plan.is_some_and(|p| p.highlight) {
                    Chrome::Highlight
                } else {
                    Chrome::Card
                },
            }
        }
    }
}

fn draw_slot(view: SlotView, width: u16, height: u16) -> Buffer {
    let rect = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(rect);
    let mut paragraph = Paragraph::new(view.lines)
        .wrap(Wrap { trim: false })
        .alignment(view.align);
    let framed = |border: Style, bg: Style| {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .padding(Padding::horizontal(1))
            .style(bg)
    };
    paragraph = match view.chrome {
        Chrome::Plain => paragraph,
        Chrome::Card => paragraph.block(framed(Styles::border_inactive(), Styles::card_bg())),
        Chrome::Highlight => {
            paragraph.block(framed(Styles::border_active(), Styles::card_highlight_bg()))
        }
    };
    paragraph.render(rect, &mut buf);
    buf
}

/// Render the landing view: header, scrolled page and scrollbar
pub fn render_landing(
    f: &mut Frame,
    landing: &mut LandingState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let [header_area, body] = Layout::vertical([
        Constraint::Length(UiConstants::HEADER_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(area);
    header.render_header(f, header_area, AppMode::Landing);

    let width = page_width(body.width);
    let (rows, height) = arrange(width);
    landing.sync(&to_layout(&rows, height), body.height);

    let scroll = landing.scroll();
    let left = body.x + (body.width - width) / 2;
    let selected = Some(landing.selected_action());
    let view_bottom = scroll.saturating_add(body.height);

    for row in &rows {
        if row.top >= view_bottom || row.top + row.height <= scroll {
            continue;
        }
        for cell in &row.cells {
            let Some(reveal) = landing.reveal(cell.slot) else {
                continue;
            };
            if !reveal.is_visible() {
                continue;
            }
            let src = draw_slot(slot_view(cell.slot, selected), cell.width, row.height);
            let shift = reveal.slide_offset();
            let dst = f.buffer_mut();

            for sy in 0..row.height.saturating_sub(shift) {
                let page_y = row.top + shift + sy;
                if page_y < scroll || page_y >= view_bottom {
                    continue;
                }
                let dy = body.y + (page_y - scroll);
                for sx in 0..cell.width {
                    let dx = left + cell.x + sx;
                    if dx >= body.right() {
                        break;
                    }
                    let target = &mut dst[(dx, dy)];
                    *target = src[(sx, sy)].clone();
                    if reveal.is_faded() {
                        target.set_style(Style::default().add_modifier(Modifier::DIM));
                    }
                }
            }
        }
    }

    if landing.max_scroll() > 0 {
        let mut scrollbar_state =
            ScrollbarState::new(landing.max_scroll() as usize).position(scroll as usize);
        let scrollbar =
            Scrollbar::new(ScrollbarOrientation::VerticalRight).style(Styles::border_inactive());
        f.render_stateful_widget(scrollbar, body, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_places_every_slot_once() {
        for width in [60, 100, 160] {
            let layout = layout(width);
            for slot in Slot::all() {
                let count = layout.placements.iter().filter(|p| p.slot == slot).count();
                assert_eq!(count, 1, "{:?} at width {}", slot, width);
            }
        }
    }

    #[test]
    fn test_layout_is_top_to_bottom() {
        let layout = layout(100);
        let tops: Vec<u16> = layout.placements.iter().map(|p| p.top).collect();
        assert!(tops.windows(2).all(|w| w[0] <= w[1]));
        let last = layout.placements.last().map(|p| p.top + p.height).unwrap_or(0);
        assert!(layout.height >= last);
    }

    #[test]
    fn test_wide_pricing_shares_one_row() {
        let layout = layout(200);
        let tops: Vec<u16> = (0..4)
            .filter_map(|i| layout.placement(Slot::Plan(i)).map(|p| p.top))
            .collect();
        assert!(tops.iter().all(|t| *t == tops[0]));
    }

    #[test]
    fn test_narrow_page_stacks_features() {
        let layout = layout(60);
        let first = layout.placement(Slot::Feature(0)).map(|p| p.top);
        let second = layout.placement(Slot::Feature(1)).map(|p| p.top);
        assert!(first < second);
    }

    #[test]
    fn test_cards_have_room_for_their_text() {
        let layout = layout(100);
        let card = layout.placement(Slot::Feature(0)).map(|p| p.height).unwrap_or(0);
        // Borders plus icon, title and body lines
        assert!(card >= 7);
    }
}

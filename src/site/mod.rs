//! Landing view model
//!
//! # Module Structure
//! - `content` - Static copy for every section
//! - `reveal` - Reveal-on-scroll animation state
//!
//! The landing page is a column of [`Slot`]s, each wrapped in its own
//! [`Reveal`]. Row positions depend on the terminal width, so the UI lays
//! the page out each frame and hands the result to
//! [`LandingState::sync`], which clamps scrolling and triggers reveals.

pub mod content;
pub mod reveal;

pub use reveal::{Reveal, RevealPhase};

use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// A revealable block of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    HeroTitle,
    HeroSubtitle,
    HeroActions,
    FeaturesHeading,
    Feature(usize),
    ActionTag,
    ActionTitle,
    ActionPreview,
    CallToAction,
    PricingHeading,
    Plan(usize),
}

impl Slot {
    /// Every slot in document order
    pub fn all() -> Vec<Slot> {
        let mut slots = vec![Slot::HeroTitle, Slot::HeroSubtitle, Slot::HeroActions, Slot::FeaturesHeading];
        slots.extend((0..content::FEATURES.len()).map(Slot::Feature));
        slots.extend([
            Slot::ActionTag,
            Slot::ActionTitle,
            Slot::ActionPreview,
            Slot::CallToAction,
            Slot::PricingHeading,
        ]);
        slots.extend((0..content::PLANS.len()).map(Slot::Plan));
        slots
    }

    /// Seconds between entering the viewport and starting to animate
    pub fn delay(self) -> f64 {
        match self {
            Slot::HeroTitle | Slot::ActionTag | Slot::Feature(0) => 0.1,
            // Second feature row restarts at 0.2
            Slot::HeroSubtitle | Slot::ActionTitle | Slot::Feature(1) | Slot::Feature(3) => 0.2,
            Slot::HeroActions | Slot::ActionPreview | Slot::Feature(_) => 0.3,
            Slot::Plan(i) => 0.1 * i as f64,
            Slot::FeaturesHeading | Slot::CallToAction | Slot::PricingHeading => 0.0,
        }
    }
}

/// Scroll targets for the landing buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Features,
    Pricing,
}

impl Anchor {
    /// Slot whose top row the anchor scrolls to
    pub fn slot(self) -> Slot {
        match self {
            Anchor::Features => Slot::FeaturesHeading,
            Anchor::Pricing => Slot::PricingHeading,
        }
    }
}

/// A selectable button on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    GetStarted,
    LearnMore,
    TryDemo,
    GetMerch,
}

impl LandingAction {
    /// Buttons in the order `←`/`→` cycles through them
    pub const ALL: [LandingAction; 4] = [
        LandingAction::GetStarted,
        LandingAction::LearnMore,
        LandingAction::TryDemo,
        LandingAction::GetMerch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LandingAction::GetStarted => "Get Started",
            LandingAction::LearnMore => "Learn more",
            LandingAction::TryDemo => "Try the demo",
            LandingAction::GetMerch => "Get Merch AI",
        }
    }

    /// Slot the button is drawn in
    pub fn slot(self) -> Slot {
        match self {
            LandingAction::GetStarted | LandingAction::LearnMore => Slot::HeroActions,
            LandingAction::TryDemo => Slot::ActionTitle,
            LandingAction::GetMerch => Slot::CallToAction,
        }
    }

    /// Where the button scrolls to; `None` for the demo button
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            LandingAction::GetStarted | LandingAction::GetMerch => Some(Anchor::Pricing),
            LandingAction::LearnMore => Some(Anchor::Features),
            LandingAction::TryDemo => None,
        }
    }
}

/// Where a slot landed in the laid-out page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub top: u16,
    pub height: u16,
}

/// Row positions of every slot for one page width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingLayout {
    pub placements: Vec<Placement>,
    pub height: u16,
}

impl LandingLayout {
    pub fn placement(&self, slot: Slot) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot == slot)
    }
}

/// Scroll position, button selection and reveal state of the landing view
#[derive(Debug, Clone)]
pub struct LandingState {
    scroll: u16,
    viewport: u16,
    content_height: u16,
    selected: usize,
    reveals: HashMap<Slot, Reveal>,
    anchors: HashMap<Anchor, u16>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingState {
    pub fn new() -> Self {
        let reveals = Slot::all()
            .into_iter()
            .map(|slot| (slot, Reveal::new(slot.delay())))
            .collect();
        Self {
            scroll: 0,
            viewport: 0,
            content_height: 0,
            selected: 0,
            reveals,
            anchors: HashMap::new(),
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport)
    }

    /// Take the layout of the current frame: clamp scrolling, remember
    /// anchor rows and trigger reveals for slots now in view.
    pub fn sync(&mut self, layout: &LandingLayout, viewport: u16) {
        self.viewport = viewport;
        self.content_height = layout.height;
        self.scroll = self.scroll.min(self.max_scroll());

        for anchor in [Anchor::Features, Anchor::Pricing] {
            if let Some(p) = layout.placement(anchor.slot()) {
                self.anchors.insert(anchor, p.top);
            }
        }

        for p in &layout.placements {
            if let Some(reveal) = self.reveals.get_mut(&p.slot) {
                if reveal.observe(p.top, p.height, self.scroll, viewport) {
                    debug!(slot = ?p.slot, "Revealing landing block");
                }
            }
        }
    }

    /// Advance every reveal animation
    pub fn tick(&mut self, dt: Duration) {
        for reveal in self.reveals.values_mut() {
            reveal.tick(dt);
        }
    }

    pub fn reveal(&self, slot: Slot) -> Option<&Reveal> {
        self.reveals.get(&slot)
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.saturating_sub(2).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Scroll so `anchor` sits at the top of the viewport, as far as possible
    pub fn jump_to(&mut self, anchor: Anchor) {
        if let Some(&top) = self.anchors.get(&anchor) {
            self.scroll = top.min(self.max_scroll());
        }
    }

    pub fn selected_action(&self) -> LandingAction {
        LandingAction::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % LandingAction::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + LandingAction::ALL.len() - 1) % LandingAction::ALL.len();
    }

    /// Run the selected button's scroll, if it has one, and return it
    pub fn activate(&mut self) -> LandingAction {
        let action = self.selected_action();
        if let Some(anchor) = action.anchor() {
            self.jump_to(anchor);
        }
        action
    }
}

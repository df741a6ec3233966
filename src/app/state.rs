//! Application state definitions
//!
//! Contains the view-level state of the TUI: the current mode, the landing
//! page model, the prompt line and demo panel scrolling. Demo data itself
//! lives in [`DemoSession`](crate::demo::DemoSession).

use crate::input::PromptInput;
use crate::site::LandingState;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Marketing page - hero, features, pricing
    Landing,
    /// Three-panel research agent demo
    Demo,
}

impl AppMode {
    /// The other view, for `Tab`
    pub fn toggled(self) -> Self {
        match self {
            AppMode::Landing => AppMode::Demo,
            AppMode::Demo => AppMode::Landing,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppMode::Landing => "Home",
            AppMode::Demo => "Demo",
        }
    }
}

/// Scroll position of a demo panel that grows at the bottom
///
/// While following, the view is pinned to the last row. Scrolling up stops
/// following; scrolling back to the bottom resumes it. Used by the
/// transcript and the sources panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelScroll {
    offset: u16,
    max: u16,
    page: u16,
    follow: bool,
}

impl Default for PanelScroll {
    fn default() -> Self {
        Self {
            offset: 0,
            max: 0,
            page: 1,
            follow: true,
        }
    }
}

impl PanelScroll {
    /// Record the rendered height; called once per frame
    pub fn sync(&mut self, total_rows: u16, viewport: u16) {
        self.max = total_rows.saturating_sub(viewport);
        self.page = viewport.saturating_sub(1).max(1);
        self.offset = if self.follow {
            self.max
        } else {
            self.offset.min(self.max)
        };
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Pin the view to the bottom again
    pub fn follow_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max;
    }

    pub fn scroll_up(&mut self, rows: u16) {
        if self.max == 0 {
            return;
        }
        self.offset = self.offset.saturating_sub(rows);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max);
        if self.offset == self.max {
            self.follow = true;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page);
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Landing page scroll, selection and reveals
    pub landing: LandingState,
    /// Demo prompt line
    pub input: PromptInput,
    /// Demo transcript scroll
    pub transcript: PanelScroll,
    /// Sources panel scroll
    pub sources: PanelScroll,
    /// Frame counter driving spinners
    pub frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Landing,
            help_visible: false,
            landing: LandingState::new(),
            input: PromptInput::new(),
            transcript: PanelScroll::default(),
            sources: PanelScroll::default(),
            frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AppMode::Landing.toggled(), AppMode::Demo);
        assert_eq!(AppMode::Demo.toggled(), AppMode::Landing);
    }

    #[test]
    fn test_transcript_follows_by_default() {
        let mut scroll = PanelScroll::default();
        scroll.sync(50, 10);
        assert_eq!(scroll.offset(), 40);
        scroll.sync(60, 10);
        assert_eq!(scroll.offset(), 50);
    }

    #[test]
    fn test_scrolling_up_stops_following() {
        let mut scroll = PanelScroll::default();
        scroll.sync(50, 10);
        scroll.scroll_up(5);
        assert!(!scroll.is_following());
        scroll.sync(60, 10);
        assert_eq!(scroll.offset(), 35);

        scroll.scroll_down(100);
        assert!(scroll.is_following());
        assert_eq!(scroll.offset(), 50);
    }

    #[test]
    fn test_short_transcript_never_scrolls() {
        let mut scroll = PanelScroll::default();
        scroll.sync(5, 10);
        scroll.scroll_up(3);
        assert!(scroll.is_following());
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_follow_bottom_snaps() {
        let mut scroll = PanelScroll::default();
        scroll.sync(50, 10);
        scroll.page_up();
        assert_eq!(scroll.offset(), 31);
        scroll.follow_bottom();
        assert_eq!(scroll.offset(), 40);
    }
}

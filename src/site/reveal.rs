//! Reveal-on-scroll animation
//!
//! A [`Reveal`] starts hidden, is triggered the first time its rows enter
//! the viewport, waits out its delay and then eases in with a damped
//! spring. It reveals once: scrolling away never hides it again.
//!
//! ```text
//! Hidden --(enters viewport)--> Waiting --(delay)--> Animating --(settled)--> Shown
//! ```

use std::time::Duration;

/// Rows trimmed from each edge of the viewport before testing intersection
pub const VIEWPORT_MARGIN: u16 = 1;

/// Rows a block is pushed down by while fully hidden
pub const SLIDE_ROWS: f64 = 2.0;

const SUBSTEP: f64 = 1.0 / 240.0;
const SETTLE_POSITION: f64 = 1e-3;
const SETTLE_VELOCITY: f64 = 5e-3;

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 100.0,
            mass: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Waiting,
    Animating,
    Shown,
}

/// Animation state of one landing block
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    delay: Duration,
    spring: Spring,
    phase: RevealPhase,
    waited: Duration,
    position: f64,
    velocity: f64,
}

impl Reveal {
    /// A hidden block that starts animating `delay_secs` after it is seen
    pub fn new(delay_secs: f64) -> Self {
        Self {
            delay: Duration::from_secs_f64(delay_secs.max(0.0)),
            spring: Spring::default(),
            phase: RevealPhase::Hidden,
            waited: Duration::ZERO,
            position: 0.0,
            velocity: 0.0,
        }
    }

    /// A block that skips the animation entirely
    pub fn shown() -> Self {
        Self {
            phase: RevealPhase::Shown,
            position: 1.0,
            ..Self::new(0.0)
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 0.0 while hidden, 1.0 once shown
    pub fn progress(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    /// Trigger the reveal if rows `[top, top + height)` meet the viewport
    /// `[view_top, view_top + view_height)` shrunk by [`VIEWPORT_MARGIN`].
    ///
    /// Returns true when this call triggered it.
    pub fn observe(&mut self, top: u16, height: u16, view_top: u16, view_height: u16) -> bool {
        if self.phase != RevealPhase::Hidden {
            return false;
        }
        if intersects(top, height, view_top, view_height) {
            self.phase = RevealPhase::Waiting;
            return true;
        }
        false
    }

    /// Advance the animation by `dt`
    pub fn tick(&mut self, dt: Duration) {
        match self.phase {
            RevealPhase::Hidden | RevealPhase::Shown => {}
            RevealPhase::Waiting => {
                self.waited += dt;
                if self.waited >= self.delay {
                    let carry = self.waited - self.delay;
                    self.phase = RevealPhase::Animating;
                    self.integrate(carry.as_secs_f64());
                }
            }
            RevealPhase::Animating => self.integrate(dt.as_secs_f64()),
        }
    }

    fn integrate(&mut self, mut secs: f64) {
        let Spring {
            damping,
            stiffness,
            mass,
        } = self.spring;
        while secs > 0.0 && self.phase == RevealPhase::Animating {
            let h = secs.min(SUBSTEP);
            let accel = (-stiffness * (self.position - 1.0) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            secs -= h;

            if (self.position - 1.0).abs() < SETTLE_POSITION && self.velocity.abs() < SETTLE_VELOCITY {
                self.position = 1.0;
                self.velocity = 0.0;
                self.phase = RevealPhase::Shown;
            }
        }
    }

    /// True once any part of the block should be drawn
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Animating | RevealPhase::Shown) && self.position > 0.05
    }

    /// True while the block should be drawn dimmed
    pub fn is_faded(&self) -> bool {
        self.progress() < 0.6
    }

    /// Rows the block is currently pushed down by
    pub fn slide_offset(&self) -> u16 {
        ((1.0 - self.progress()) * SLIDE_ROWS).round() as u16
    }
}

fn intersects(top: u16, height: u16, view_top: u16, view_height: u16) -> bool {
    let view_bottom = view_top.saturating_add(view_height);
    let inner_top = view_top.saturating_add(VIEWPORT_MARGIN);
    let inner_bottom = view_bottom.saturating_sub(VIEWPORT_MARGIN).max(inner_top);
    let bottom = top.saturating_add(height);
    height > 0 && top < inner_bottom && bottom > inner_top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(reveal: &mut Reveal, total: Duration) {
        let step = Duration::from_millis(16);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            reveal.tick(step);
            elapsed += step;
        }
    }

    #[test]
    fn test_starts_hidden() {
        let reveal = Reveal::new(0.1);
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
        assert!(!reveal.is_visible());
        assert_eq!(reveal.slide_offset(), 2);
    }

    #[test]
    fn test_tick_without_observe_stays_hidden() {
        let mut reveal = Reveal::new(0.0);
        run(&mut reveal, Duration::from_secs(2));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_waits_for_delay() {
        let mut reveal = Reveal::new(0.3);
        assert!(reveal.observe(10, 3, 0, 20));
        reveal.tick(Duration::from_millis(200));
        assert_eq!(reveal.phase(), RevealPhase::Waiting);
        reveal.tick(Duration::from_millis(150));
        assert_eq!(reveal.phase(), RevealPhase::Animating);
    }

    #[test]
    fn test_settles_to_shown() {
        let mut reveal = Reveal::new(0.0);
        reveal.observe(0, 5, 0, 20);
        run(&mut reveal, Duration::from_secs(3));
        assert_eq!(reveal.phase(), RevealPhase::Shown);
        assert_eq!(reveal.progress(), 1.0);
        assert_eq!(reveal.slide_offset(), 0);
        assert!(!reveal.is_faded());
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut reveal = Reveal::new(0.0);
        reveal.observe(0, 5, 0, 20);
        let mut last = 0.0;
        for _ in 0..120 {
            reveal.tick(Duration::from_millis(16));
            assert!(reveal.progress() >= last);
            last = reveal.progress();
        }
    }

    #[test]
    fn test_reveals_once() {
        let mut reveal = Reveal::new(0.0);
        assert!(reveal.observe(0, 5, 0, 20));
        assert!(!reveal.observe(0, 5, 0, 20));
        run(&mut reveal, Duration::from_secs(3));
        // Scrolled far away: stays shown
        assert!(!reveal.observe(0, 5, 500, 20));
        assert_eq!(reveal.phase(), RevealPhase::Shown);
    }

    #[test]
    fn test_margin_excludes_edge_rows() {
        // Only the last row of the viewport is touched
        let mut reveal = Reveal::new(0.0);
        assert!(!reveal.observe(19, 4, 0, 20));
        // Two rows inside
        assert!(reveal.observe(18, 4, 0, 20));
    }

    #[test]
    fn test_out_of_view_not_triggered() {
        let mut reveal = Reveal::new(0.0);
        assert!(!reveal.observe(40, 5, 0, 20));
        assert!(!reveal.observe(0, 0, 0, 20));
    }

    #[test]
    fn test_shown_constructor() {
        let reveal = Reveal::shown();
        assert!(reveal.is_visible());
        assert_eq!(reveal.progress(), 1.0);
    }
}

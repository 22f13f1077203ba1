//! Scroll-driven entrance animations.
//!
//! This module is the platform-neutral core of the page animations: easing
//! curves, one-shot tweens, scroll triggers and the per-role entrance plans.
//! It deliberately contains no DOM types; inputs are a [`Viewport`] and
//! per-element [`ElementMetrics`], outputs are [`StyleDelta`] values. The
//! wasm32-only `page` module translates between the two worlds, which keeps
//! everything here testable off-browser.
//!
//! An [`Entrance`] is a one-shot task: it arms at registration, starts once
//! its trigger condition is met (or immediately when it has none) and then
//! runs to completion autonomously, even if the triggering element scrolls
//! back out of view.

pub mod easing;
pub mod plan;
pub mod trigger;
pub mod tween;

pub use easing::Ease;
pub use plan::Role;
pub use trigger::{ElementMetrics, ScrollTrigger, Viewport, nav_scrolled};
pub use tween::{StyleDelta, Tween};

/// Playback state of a one-shot entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Playback {
    Armed,
    Running { elapsed: f32 },
    Done,
}

/// What the caller should do with an element after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntranceStyle {
    /// Write this style to the element.
    Apply(StyleDelta),
    /// The entrance just completed: remove the inline styling so the page's
    /// own stylesheet wins again.
    Clear,
    /// Nothing to do, the entrance finished earlier.
    Idle,
}

/// A one-shot entrance animation for a single element.
#[derive(Clone, Debug)]
pub struct Entrance {
    pub tween: Tween,
    pub trigger: Option<ScrollTrigger>,
    state: Playback,
}

impl Entrance {
    pub fn new(tween: Tween, trigger: Option<ScrollTrigger>) -> Self {
        Self {
            tween,
            trigger,
            state: Playback::Armed,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// While armed the element holds the tween's from-state. The trigger is
    /// only consulted while armed, which is what makes the entrance
    /// fire-once: scrolling the element out and back in cannot restart a
    /// running or finished animation.
    pub fn tick(
        &mut self,
        dt: f32,
        metrics: Option<&ElementMetrics>,
        viewport: &Viewport,
    ) -> EntranceStyle {
        match self.state {
            Playback::Armed => {
                let fired = match (&self.trigger, metrics) {
                    (Some(trigger), Some(metrics)) => trigger.fires(metrics, viewport),
                    (Some(_), None) => false,
                    (None, _) => true,
                };
                if fired {
                    self.state = Playback::Running { elapsed: 0.0 };
                }
                EntranceStyle::Apply(self.tween.sample(0.0))
            }
            Playback::Running { elapsed } => {
                let elapsed = elapsed + dt;
                if self.tween.finished(elapsed) {
                    self.state = Playback::Done;
                    EntranceStyle::Clear
                } else {
                    self.state = Playback::Running { elapsed };
                    EntranceStyle::Apply(self.tween.sample(elapsed))
                }
            }
            Playback::Done => EntranceStyle::Idle,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == Playback::Done
    }

    pub fn has_started(&self) -> bool {
        self.state != Playback::Armed
    }
}

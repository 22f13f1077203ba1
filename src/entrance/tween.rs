//! One-shot from-state tweens.
//!
//! A tween describes how an element enters: it starts displaced (and usually
//! transparent) and eases to its natural place in the layout. The natural
//! state is always the identity delta, so a tween only has to carry its
//! from-state and timing.

use crate::entrance::easing::Ease;

/// A style offset relative to an element's natural state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleDelta {
    /// Horizontal offset in px.
    pub dx: f32,
    /// Vertical offset in px.
    pub dy: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl StyleDelta {
    pub const IDENTITY: StyleDelta = StyleDelta {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// A transparent from-state shifted vertically.
    pub fn offset_y(dy: f32) -> Self {
        Self {
            dy,
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    /// A transparent from-state shifted horizontally.
    pub fn offset_x(dx: f32) -> Self {
        Self {
            dx,
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    /// A transparent from-state scaled around the element centre.
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale,
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    /// Interpolate towards the identity with eased progress `e`.
    fn towards_identity(&self, e: f32) -> StyleDelta {
        StyleDelta {
            dx: self.dx * (1.0 - e),
            dy: self.dy * (1.0 - e),
            scale: self.scale + (1.0 - self.scale) * e,
            opacity: self.opacity + (1.0 - self.opacity) * e,
        }
    }
}

/// An entrance tween: from-state, timing and easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: StyleDelta,
    /// Animation duration in seconds.
    pub duration: f32,
    /// Start delay in seconds, used for staggered starts.
    pub delay: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: StyleDelta, duration: f32, delay: f32, ease: Ease) -> Self {
        Self {
            from,
            duration,
            delay,
            ease,
        }
    }

    /// The style at `elapsed` seconds after the tween started.
    ///
    /// Holds the from-state through the delay and reaches the identity at
    /// `delay + duration`. Overshooting eases may pass the identity on the
    /// way there.
    pub fn sample(&self, elapsed: f32) -> StyleDelta {
        if elapsed <= self.delay {
            return self.from;
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        self.from.towards_identity(self.ease.value(t))
    }

    pub fn finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

//! Pointer tracking for the backdrop rotation bias.
//!
//! The tracker is the single writer: it overwrites two scalars on every
//! cursor event. Layers never read it directly; the event loop snapshots it
//! once per frame into an immutable [`PointerOffset`] so the per-frame code
//! has no ambient mutable state to reach into.

use winit::dpi::PhysicalPosition;

/// Scale applied to the raw offset from the viewport centre.
pub const POINTER_SCALE: f32 = 0.05;

/// Pointer offset from the viewport centre, scaled by [`POINTER_SCALE`].
///
/// An offset of zero means the pointer rests on the centre of the viewport
/// (or has not moved yet).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

/// Mutable pointer state fed by cursor events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    offset: PointerOffset,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the tracked offset from a cursor position in physical pixels.
    pub fn track(&mut self, position: PhysicalPosition<f64>, width: u32, height: u32) {
        self.offset = PointerOffset {
            x: (position.x as f32 - width as f32 / 2.0) * POINTER_SCALE,
            y: (position.y as f32 - height as f32 / 2.0) * POINTER_SCALE,
        };
    }

    /// Capture the current offset for a frame.
    pub fn snapshot(&self) -> PointerOffset {
        self.offset
    }
}

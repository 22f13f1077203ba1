//! The layer abstraction driven by the event loop.
//!
//! A layer is one independent strand of page decoration: the 3D backdrop is
//! one layer, the scroll-driven entrance animations are another. Layers are
//! registered in a fixed order, initialized once, receive window events and a
//! per-frame snapshot, and contribute render batches.
//!
//! # Lifecycle
//!
//! 1. `on_init()` is called once after the GPU context exists
//! 2. `on_window_events()` is called for each winit input event
//! 3. `on_frame()` is called every frame with an immutable [`FrameSnapshot`]
//! 4. `on_render()` is called each frame and specifies how to render `self`

use std::{fmt::Debug, pin::Pin};

use instant::Duration;
use winit::event::WindowEvent;

use crate::{
    context::{Context, InitContext},
    pointer::PointerOffset,
    render::Render,
};

/// Everything a layer may read during a frame, captured once per frame.
///
/// The pointer offset is a snapshot: the event handler that writes pointer
/// state and the frame callback that reads it never share a mutable value.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    pub dt: Duration,
    pub pointer: PointerOffset,
}

/// Trait for an independently animated slice of the page decoration.
pub trait Layer {
    /// Initialize the layer once the context is live.
    fn on_init(&mut self, ctx: &mut Context);

    /// Handle window events (cursor movement, resizing, etc.).
    fn on_window_events(&mut self, ctx: &Context, event: &WindowEvent);

    /// Advance the layer by one frame.
    fn on_frame(&mut self, ctx: &Context, frame: &FrameSnapshot);

    /// Return renderable batches for this layer.
    ///
    /// Called each frame. The engine batches all layers' renders per
    /// pipeline and draws them in one pass.
    fn on_render(&self) -> Render<'_>;
}

// Dummy impl to make wasm work
impl Debug for dyn Layer + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Layer")
    }
}

/// Type alias for a layer constructor (factory function).
///
/// A layer constructor takes an `InitContext` and asynchronously returns a
/// boxed [`Layer`]. This allows lazy initialization before the event loop
/// takes over.
pub type LayerConstructor =
    Box<dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = Box<dyn Layer>>>>>;

//! drift-ngin
//!
//! A decorative backdrop engine for landing pages, focused on native and
//! WASM compatibility. The crate renders a pointer-reactive field of slowly
//! rotating polyhedra behind the page content and drives scroll-triggered
//! entrance animations for the page sections themselves. All animation
//! timing (easing, tweens, scroll triggers) is plain Rust with no DOM types,
//! so it is usable and testable off-browser; only the page binding layer is
//! compiled for wasm32.
//!
//! High-level modules
//! - `app`: event loop driving layers, resizing and the per-frame snapshot
//! - `backdrop`: the 3D shape field (population, spin, pointer smoothing)
//! - `camera`: fixed perspective camera and view/projection uniforms
//! - `context`: central GPU context that owns device/queue/pipelines
//! - `data_structures`: instances and procedural polyhedron meshes
//! - `entrance`: easing curves, one-shot tweens and scroll triggers
//! - `layer`: the `Layer` trait implemented by backdrop and entrance
//! - `page`: DOM binding and the wasm entry point (wasm32 only)
//! - `pipelines`: shaded and wireframe render pipelines plus lighting
//! - `render`: render composition for efficient pipeline reuse
//!

pub mod app;
pub mod backdrop;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod entrance;
pub mod layer;
#[cfg(target_arch = "wasm32")]
pub mod page;
pub mod pipelines;
pub mod pointer;
pub mod render;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::dpi::PhysicalPosition;
pub use winit::event::WindowEvent;
pub use wgpu::*;

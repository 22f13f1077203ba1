//! The decorative 3D backdrop: a field of slowly rotating polyhedra.
//!
//! Two shape populations share one group rotation: 80 dark flat-shaded
//! icosahedra ("noise") and 15 bright wireframe tetrahedra ("accents").
//! The group rotation eases towards a target derived from the pointer
//! offset and rolls slowly around the view axis on its own; every shape
//! additionally accumulates its own random spin, indefinitely.
//!
//! All tuning constants were picked by eye, there is no physical model
//! behind them. They live in [`BackdropConfig`] so a host page can deviate
//! from the stock look.

pub mod field;

use cgmath::{Euler, Quaternion, Rad, Vector3};
use rand::rng;
use winit::event::WindowEvent;

use crate::{
    context::{Context, InitContext},
    data_structures::{instance::Instance, polyhedron::Polyhedron},
    layer::{FrameSnapshot, Layer},
    render::Render,
};
use field::{FieldParams, ShapeField};

pub use field::scatter;

/// Colour of the noise icosahedra (0x222222 at 70% opacity).
pub const NOISE_COLOR: [f32; 4] = [0.133, 0.133, 0.133, 0.7];

/// The two accent colours (0x00d2ff and 0xff4b4b), picked uniformly.
pub const ACCENT_PALETTE: [[f32; 4]; 2] = [
    [0.0, 0.824, 1.0, 1.0],
    [1.0, 0.294, 0.294, 1.0],
];

/// Tunables for the backdrop field.
///
/// Spin, smoothing and roll rates are per frame: the redraw loop is the
/// clock the original motion was tuned against.
#[derive(Clone, Debug)]
pub struct BackdropConfig {
    /// Number of noise icosahedra.
    pub noise_count: usize,
    /// Half-extents of the noise placement box.
    pub noise_bounds: Vector3<f32>,
    /// Uniform scale range for noise shapes.
    pub noise_scale: std::ops::Range<f32>,
    /// Per-axis noise spin rate bound (rad/frame, drawn from ±this).
    pub noise_spin: f32,
    /// Number of accent tetrahedra.
    pub accent_count: usize,
    /// Half-extents of the accent placement box.
    pub accent_bounds: Vector3<f32>,
    /// Per-axis accent spin rate bound (rad/frame, drawn from ±this).
    pub accent_spin: f32,
    /// Exponential smoothing factor towards the pointer target, per frame.
    pub smoothing: f32,
    /// Constant roll around the view axis, rad/frame.
    pub roll: f32,
    /// Scale from pointer offset to target rotation angle.
    pub pointer_bias: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            noise_count: 80,
            noise_bounds: Vector3::new(35.0, 35.0, 25.0),
            noise_scale: 0.5..2.0,
            noise_spin: 0.005,
            accent_count: 15,
            accent_bounds: Vector3::new(30.0, 30.0, 20.0),
            accent_spin: 0.015,
            smoothing: 0.05,
            roll: 0.0005,
            pointer_bias: 0.005,
        }
    }
}

impl BackdropConfig {
    /// Placement parameters for the noise population.
    pub fn noise_params(&self) -> FieldParams {
        FieldParams {
            count: self.noise_count,
            bounds: self.noise_bounds,
            scale: self.noise_scale.clone(),
            max_spin: self.noise_spin,
            palette: vec![NOISE_COLOR],
        }
    }

    /// Placement parameters for the accent population.
    pub fn accent_params(&self) -> FieldParams {
        FieldParams {
            count: self.accent_count,
            bounds: self.accent_bounds,
            scale: 1.0..1.0,
            max_spin: self.accent_spin,
            palette: ACCENT_PALETTE.to_vec(),
        }
    }
}

/// One exponential smoothing step of `current` towards `target`.
///
/// With a factor in (0, 1] the sequence approaches the target from one side
/// and never overshoots it.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + factor * (target - current)
}

/// The backdrop layer: owns both shape fields and the group rotation.
pub struct BackdropLayer {
    config: BackdropConfig,
    group_rotation: Vector3<f32>,
    noise: ShapeField,
    accent: ShapeField,
}

impl BackdropLayer {
    pub async fn new(init: InitContext) -> Self {
        Self::with_config(init, BackdropConfig::default()).await
    }

    pub async fn with_config(init: InitContext, config: BackdropConfig) -> Self {
        let mut rng = rng();
        let noise = ShapeField::new(
            &init.device,
            Polyhedron::icosahedron(&init.device),
            scatter(&config.noise_params(), &mut rng),
        );
        let accent = ShapeField::new(
            &init.device,
            Polyhedron::tetrahedron_edges(&init.device),
            scatter(&config.accent_params(), &mut rng),
        );
        Self {
            config,
            group_rotation: Vector3::new(0.0, 0.0, 0.0),
            noise,
            accent,
        }
    }

    /// The group transform shared by every shape this frame.
    fn group_instance(&self) -> Instance {
        let mut group = Instance::new();
        group.rotation = Quaternion::from(Euler::new(
            Rad(self.group_rotation.x),
            Rad(self.group_rotation.y),
            Rad(self.group_rotation.z),
        ));
        group
    }
}

impl Layer for BackdropLayer {
    fn on_init(&mut self, ctx: &mut Context) {
        let group = self.group_instance();
        self.noise.write_to_buffer(&ctx.queue, &group);
        self.accent.write_to_buffer(&ctx.queue, &group);
        log::info!(
            "backdrop populated with {} noise and {} accent shapes",
            self.config.noise_count,
            self.config.accent_count
        );
    }

    fn on_window_events(&mut self, _: &Context, _: &WindowEvent) {}

    fn on_frame(&mut self, ctx: &Context, frame: &FrameSnapshot) {
        // Ease the group towards the pointer-derived target; vertical
        // pointer movement tilts around x, horizontal turns around y.
        let target_x = frame.pointer.y * self.config.pointer_bias;
        let target_y = frame.pointer.x * self.config.pointer_bias;
        self.group_rotation.x = approach(self.group_rotation.x, target_x, self.config.smoothing);
        self.group_rotation.y = approach(self.group_rotation.y, target_y, self.config.smoothing);
        self.group_rotation.z += self.config.roll;

        self.noise.advance();
        self.accent.advance();

        let group = self.group_instance();
        self.noise.write_to_buffer(&ctx.queue, &group);
        self.accent.write_to_buffer(&ctx.queue, &group);
    }

    fn on_render(&self) -> Render<'_> {
        Render::Composed(vec![
            Render::Shaded(self.noise.instanced()),
            Render::Wireframe(self.accent.instanced()),
        ])
    }
}

//! Shape placement and per-instance spin bookkeeping.
//!
//! A [`ShapeField`] is one population of instanced copies of a single
//! polyhedron. Placement happens once at startup; afterwards only rotations
//! change. Spin rates, accumulated spin angles and colours are parallel
//! tables indexed alongside the instances, so the render-facing [`Instance`]
//! values carry no extraneous payload.

use cgmath::{Vector2, Vector3};
use rand::Rng;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        instance::{Instance, InstanceRaw},
        polyhedron::Polyhedron,
    },
    render::Instanced,
};

/// Placement parameters for one shape population.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Half-extents of the axis-aligned placement box around the origin.
    pub bounds: Vector3<f32>,
    /// Uniform scale range; an empty range pins the scale to its start.
    pub scale: std::ops::Range<f32>,
    /// Per-axis spin rates are drawn uniformly from ±this bound (rad/frame).
    pub max_spin: f32,
    /// Candidate colours, picked uniformly per shape.
    pub palette: Vec<[f32; 4]>,
}

/// The result of scattering one population: instances plus parallel tables.
#[derive(Clone, Debug)]
pub struct Placement {
    pub instances: Vec<Instance>,
    pub spins: Vec<Vector2<f32>>,
    pub colors: Vec<[f32; 4]>,
}

/// Scatter a population uniformly inside its placement box.
///
/// Pure with respect to the passed `rng`, which keeps placement testable
/// with a seeded generator.
pub fn scatter(params: &FieldParams, rng: &mut impl Rng) -> Placement {
    let mut instances = Vec::with_capacity(params.count);
    let mut spins = Vec::with_capacity(params.count);
    let mut colors = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let mut instance = Instance::new();
        instance.position = Vector3::new(
            rng.random_range(-params.bounds.x..params.bounds.x),
            rng.random_range(-params.bounds.y..params.bounds.y),
            rng.random_range(-params.bounds.z..params.bounds.z),
        );
        let scale = if params.scale.is_empty() {
            params.scale.start
        } else {
            rng.random_range(params.scale.clone())
        };
        instance.scale = Vector3::new(scale, scale, scale);
        instances.push(instance);

        spins.push(Vector2::new(
            rng.random_range(-params.max_spin..params.max_spin),
            rng.random_range(-params.max_spin..params.max_spin),
        ));
        colors.push(params.palette[rng.random_range(0..params.palette.len())]);
    }

    Placement {
        instances,
        spins,
        colors,
    }
}

/// One instanced shape population with its GPU buffer.
pub struct ShapeField {
    pub polyhedron: Polyhedron,
    pub instances: Vec<Instance>,
    /// Spin rate per shape, rad/frame around x and y.
    pub spins: Vec<Vector2<f32>>,
    /// Accumulated spin angles, growing without wraparound.
    pub angles: Vec<Vector2<f32>>,
    pub colors: Vec<[f32; 4]>,
    pub instance_buffer: wgpu::Buffer,
}

impl ShapeField {
    pub fn new(device: &wgpu::Device, polyhedron: Polyhedron, placement: Placement) -> Self {
        let Placement {
            instances,
            spins,
            colors,
        } = placement;
        let angles = vec![Vector2::new(0.0, 0.0); instances.len()];

        let instance_data = instances
            .iter()
            .zip(&colors)
            .map(|(instance, color)| instance.to_raw(*color))
            .collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            polyhedron,
            instances,
            spins,
            angles,
            colors,
            instance_buffer,
        }
    }

    /// Accumulate one frame of spin on every shape.
    pub fn advance(&mut self) {
        for (angle, spin) in self.angles.iter_mut().zip(&self.spins) {
            *angle += *spin;
        }
    }

    /// Rewrite the instance buffer with the group transform applied.
    pub fn write_to_buffer(&self, queue: &wgpu::Queue, group: &Instance) {
        let instance_data = self
            .instances
            .iter()
            .zip(&self.angles)
            .zip(&self.colors)
            .map(|((instance, angle), color)| {
                let mut spun = instance.clone();
                spun.rotation = cgmath::Quaternion::from(cgmath::Euler::new(
                    cgmath::Rad(angle.x),
                    cgmath::Rad(angle.y),
                    cgmath::Rad(0.0),
                ));
                (group * &spun).to_raw(*color)
            })
            .collect::<Vec<_>>();
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&instance_data),
        );
    }

    /// The render batch for this population.
    pub fn instanced(&self) -> Instanced<'_> {
        Instanced {
            instance: &self.instance_buffer,
            polyhedron: &self.polyhedron,
            amount: self.instances.len(),
        }
    }
}

//! Render pipeline definitions.
//!
//! The backdrop needs exactly two pipelines: an alpha-blended flat-shaded one
//! for the noise icosahedra and an unlit line-list one for the wireframe
//! accent tetrahedra. Both are created once at context construction and
//! reused for every frame.

pub mod light;
pub mod shaded;
pub mod wireframe;

/// The full pipeline set owned by the context.
#[derive(Debug)]
pub struct Pipelines {
    pub shaded: wgpu::RenderPipeline,
    pub wireframe: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            shaded: shaded::mk_shaded_pipeline(
                device,
                config,
                camera_bind_group_layout,
                light_bind_group_layout,
            ),
            wireframe: wireframe::mk_wireframe_pipeline(device, config, camera_bind_group_layout),
        }
    }
}

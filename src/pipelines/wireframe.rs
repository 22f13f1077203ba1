use crate::{
    data_structures::{
        instance::InstanceRaw,
        polyhedron::{ShapeVertex, Vertex},
        texture::Texture,
    },
    pipelines::shaded::mk_render_pipeline,
};

/**
 * Pipeline for the wireframe accent shapes.
 *
 * The accents render as plain coloured edges with no lighting. The mesh is an
 * edge list drawn with `LineList` topology rather than a line polygon mode,
 * which the downlevel WebGL2 limits on wasm32 do not offer.
 */
pub fn mk_wireframe_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Wireframe Pipeline Layout"),
        bind_group_layouts: &[Some(camera_bind_group_layout)],
        immediate_size: 0,
    });
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Wireframe Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("wireframe.wgsl").into()),
    };
    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        Some(Texture::DEPTH_FORMAT),
        wgpu::PrimitiveTopology::LineList,
        &[ShapeVertex::desc(), InstanceRaw::desc()],
        shader,
    )
}

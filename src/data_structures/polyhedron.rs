//! Procedural polyhedron meshes.
//!
//! The backdrop only ever draws two shapes: a low-poly icosahedron for the
//! noise field and a tetrahedron for the accents. Both are generated at
//! startup instead of being loaded from files, so the crate ships no assets.
//!
//! Icosahedra are flat shaded: every face gets its own three vertices with
//! the face normal baked in. The tetrahedron is built as an edge list for
//! line rendering, because the wireframe pipeline draws `LineList` topology.

use std::ops::Range;

use cgmath::{InnerSpace, Vector3};
use wgpu::util::DeviceExt;

/// Anything that can describe its vertex buffer layout to a pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Vertex data for the procedural shapes: position and flat face normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex for ShapeVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

// Golden ratio, spans the icosahedron's vertex rectangles.
const T: f32 = 1.618_034;

#[rustfmt::skip]
const ICOSAHEDRON_POSITIONS: [[f32; 3]; 12] = [
    [-1.0,  T, 0.0], [1.0,  T, 0.0], [-1.0, -T, 0.0], [1.0, -T, 0.0],
    [0.0, -1.0,  T], [0.0, 1.0,  T], [0.0, -1.0, -T], [0.0, 1.0, -T],
    [ T, 0.0, -1.0], [ T, 0.0, 1.0], [ -T, 0.0,-1.0], [ -T, 0.0, 1.0],
];

#[rustfmt::skip]
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

#[rustfmt::skip]
const TETRAHEDRON_POSITIONS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [1.0, -1.0, -1.0],
];

const TETRAHEDRON_EDGES: [[u32; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

/// A GPU mesh for one of the backdrop's shapes.
#[derive(Debug)]
pub struct Polyhedron {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl Polyhedron {
    /// Unit icosahedron with flat face normals, for the noise shapes.
    pub fn icosahedron(device: &wgpu::Device) -> Self {
        let positions: Vec<Vector3<f32>> = ICOSAHEDRON_POSITIONS
            .iter()
            .map(|p| Vector3::from(*p).normalize())
            .collect();

        let mut vertices = Vec::with_capacity(ICOSAHEDRON_FACES.len() * 3);
        for face in ICOSAHEDRON_FACES {
            let [a, b, c] = [positions[face[0]], positions[face[1]], positions[face[2]]];
            let normal = (b - a).cross(c - a).normalize();
            for p in [a, b, c] {
                vertices.push(ShapeVertex {
                    position: p.into(),
                    normal: normal.into(),
                });
            }
        }
        let indices: Vec<u32> = (0..vertices.len() as u32).collect();

        Self::from_parts("icosahedron", device, &vertices, &indices)
    }

    /// Unit tetrahedron as an edge list, for the wireframe accents.
    pub fn tetrahedron_edges(device: &wgpu::Device) -> Self {
        let vertices: Vec<ShapeVertex> = TETRAHEDRON_POSITIONS
            .iter()
            .map(|p| {
                let p = Vector3::from(*p).normalize();
                ShapeVertex {
                    position: p.into(),
                    // Edges are drawn unlit, the outward direction is good enough
                    normal: p.into(),
                }
            })
            .collect();
        let indices: Vec<u32> = TETRAHEDRON_EDGES.iter().flatten().copied().collect();

        Self::from_parts("tetrahedron", device, &vertices, &indices)
    }

    fn from_parts(
        name: &str,
        device: &wgpu::Device,
        vertices: &[ShapeVertex],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", name)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: indices.len() as u32,
        }
    }
}

/// Draw commands for [`Polyhedron`] meshes.
pub trait DrawPolyhedron<'a> {
    /// Draw instances of a shaded polyhedron with camera and light bound.
    fn draw_polyhedron_instanced(
        &mut self,
        polyhedron: &'a Polyhedron,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );

    /// Draw instances of an unlit polyhedron edge list.
    fn draw_polyhedron_edges_instanced(
        &mut self,
        polyhedron: &'a Polyhedron,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawPolyhedron<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_polyhedron_instanced(
        &mut self,
        polyhedron: &'b Polyhedron,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, polyhedron.vertex_buffer.slice(..));
        self.set_index_buffer(polyhedron.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, camera_bind_group, &[]);
        self.set_bind_group(1, light_bind_group, &[]);
        self.draw_indexed(0..polyhedron.num_elements, 0, instances);
    }

    fn draw_polyhedron_edges_instanced(
        &mut self,
        polyhedron: &'b Polyhedron,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, polyhedron.vertex_buffer.slice(..));
        self.set_index_buffer(polyhedron.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, camera_bind_group, &[]);
        self.draw_indexed(0..polyhedron.num_elements, 0, instances);
    }
}

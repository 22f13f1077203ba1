//! Render composition and pipeline batching.
//!
//! This module defines the [`Render`] enum, which layers use to specify how
//! they should be rendered. The engine sorts the returned values into one
//! batch per pipeline (shaded, wireframe) so each pipeline is bound exactly
//! once per frame regardless of how many layers contribute to it.

use crate::data_structures::polyhedron::Polyhedron;

/// Data for instanced rendering: a polyhedron plus its instance buffer.
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub polyhedron: &'a Polyhedron,
    pub amount: usize,
}

/// Specifies how a layer should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Shaded(Instanced)` renders instances through the flat-shaded pipeline
/// - `Wireframe(Instanced)` renders instances through the line-list pipeline
/// - `Composed(Vec<Render>)` recursively renders a composition
pub enum Render<'a> {
    None,
    Shaded(Instanced<'a>),
    Wireframe(Instanced<'a>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Sort this render into the per-pipeline batches.
    pub(crate) fn set_pipelines(
        self,
        shaded: &mut Vec<Instanced<'a>>,
        wireframe: &mut Vec<Instanced<'a>>,
    ) {
        match self {
            Render::Shaded(instanced) => shaded.push(instanced),
            Render::Wireframe(instanced) => wireframe.push(instanced),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(shaded, wireframe)),
            Render::None => (),
        }
    }
}

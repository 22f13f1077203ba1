//! Engine data structures: instances and procedural meshes.
//!
//! This module contains the core data types for scene representation:
//!
//! - `instance` holds per-instance transformation and colour data
//! - `polyhedron` builds the procedural unit polyhedra the backdrop renders
//! - `texture` contains the depth attachment wrapper

pub mod instance;
pub mod polyhedron;
pub mod texture;

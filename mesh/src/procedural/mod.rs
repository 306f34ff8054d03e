//! Procedural torus generation
//!
//! Builds CPU-side torus meshes for fixed-function style rendering. Every
//! mesh carries separate f32 arrays (positions, normals, texture coordinates)
//! plus an interleaved view in the 32-byte layout described in
//! [`crate::layout`].
//!
//! Two shading variants are supported:
//! - Smooth: `(sides + 1) × (sectors + 1)` shared vertices with per-vertex normals
//! - Flat: `sides × sectors × 4` vertices, one face normal per quad

mod axis;
mod export;
mod normals;
mod torus;
mod types;


pub use types::{
    Adjustment, ClampReport, MAX_SECTOR_COUNT, MAX_SIDE_COUNT, MIN_SECTOR_COUNT, MIN_SIDE_COUNT,
    Mesh, MeshParameters, ParseUpAxisError, UpAxis,
};

pub use axis::up_axis_rotation;
pub use normals::{FACE_NORMAL_EPSILON, compute_face_normal};
pub use torus::{TorusMeshBuilder, generate_torus};

// Re-export OBJ export
pub use export::{ObjOptions, encode_obj, write_obj, write_obj_with};

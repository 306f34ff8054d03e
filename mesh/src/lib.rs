//! Torus mesh generation for immediate-mode rendering
//!
//! # Example
//! ```
//! use toroid_mesh::{MeshParameters, TorusMeshBuilder, UpAxis};
//!
//! let mut torus = TorusMeshBuilder::new(MeshParameters {
//!     sector_count: 4,
//!     side_count: 4,
//!     ..MeshParameters::default()
//! });
//! assert_eq!(torus.mesh().vertex_count(), 25);
//!
//! // Rotates the existing mesh, no regeneration
//! torus.set_up_axis(UpAxis::Y);
//! assert_eq!(torus.mesh().interleaved_floats().len(), 25 * 8);
//! ```

pub mod layout;
pub mod procedural;

pub use layout::{INTERLEAVED_FLOATS, INTERLEAVED_STRIDE, InterleavedVertex};
pub use procedural::{
    Adjustment, ClampReport, Mesh, MeshParameters, ObjOptions, TorusMeshBuilder, UpAxis,
    compute_face_normal, generate_torus, write_obj, write_obj_with,
};

//! Face normals and normal reversal

use glam::Vec3;

use super::types::Mesh;

/// Edge-length threshold below which a face counts as degenerate
pub const FACE_NORMAL_EPSILON: f32 = 0.000_001;

/// Face normal of triangle v1-v2-v3 from the edges v1→v2 and v1→v3
///
/// Returns a zero vector for degenerate (zero-area) triangles.
pub fn compute_face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    let normal = (v2 - v1).cross(v3 - v1);
    let length = normal.length();
    if length > FACE_NORMAL_EPSILON {
        normal / length
    } else {
        Vec3::ZERO
    }
}

impl Mesh {
    /// Flip every normal and every triangle's winding
    ///
    /// Touches normals, triangle indices and the interleaved view. Line
    /// indices are unchanged.
    pub fn reverse_normals(&mut self) {
        for normal in self.normals_mut() {
            *normal = (-Vec3::from(*normal)).to_array();
        }

        // swap first and last index so front faces follow the flipped normals
        for triangle in self.indices_mut().chunks_exact_mut(3) {
            triangle.swap(0, 2);
        }

        self.rebuild_interleaved();
    }
}

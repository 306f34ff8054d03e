//! Up-axis rotation
//!
//! The generators build the torus around +Z. Facing another axis is a fixed
//! quarter-turn rotation of positions and normals; texture coordinates and
//! indices are left alone.

use glam::{Mat3, Vec3};
use tracing::debug;

use super::types::{Mesh, UpAxis};

/// Rotation taking geometry facing `from` to geometry facing `to`
///
/// Returns the identity when both axes are the same. For distinct axes the
/// matrix for `(to, from)` is the inverse of the matrix for `(from, to)`.
pub fn up_axis_rotation(from: UpAxis, to: UpAxis) -> Mat3 {
    match (from, to) {
        (UpAxis::X, UpAxis::Y) => Mat3::from_cols(Vec3::Y, Vec3::NEG_X, Vec3::Z),
        (UpAxis::X, UpAxis::Z) => Mat3::from_cols(Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (UpAxis::Y, UpAxis::X) => Mat3::from_cols(Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (UpAxis::Y, UpAxis::Z) => Mat3::from_cols(Vec3::X, Vec3::Z, Vec3::NEG_Y),
        (UpAxis::Z, UpAxis::X) => Mat3::from_cols(Vec3::NEG_Z, Vec3::Y, Vec3::X),
        (UpAxis::Z, UpAxis::Y) => Mat3::from_cols(Vec3::X, Vec3::NEG_Z, Vec3::Y),
        _ => Mat3::IDENTITY,
    }
}

impl Mesh {
    /// Rotate positions and normals in place from one up axis to another
    ///
    /// Touches positions, normals and the interleaved view. No-op when
    /// `from == to`.
    pub fn change_up_axis(&mut self, from: UpAxis, to: UpAxis) {
        if from == to {
            return;
        }

        debug!("changing up axis {} -> {}", from, to);
        let rotation = up_axis_rotation(from, to);

        for position in self.positions_mut() {
            *position = (rotation * Vec3::from(*position)).to_array();
        }

        for normal in self.normals_mut() {
            *normal = (rotation * Vec3::from(*normal)).to_array();
        }

        self.rebuild_interleaved();
    }
}

//! Procedural mesh types
//!
//! Parameters, clamping reports, and the owned mesh produced by the torus
//! generator.

use std::fmt;
use std::str::FromStr;

use bytemuck::cast_slice;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::{INTERLEAVED_STRIDE, InterleavedVertex};

/// Minimum number of sectors around the major circle
pub const MIN_SECTOR_COUNT: u32 = 3;

/// Minimum number of sides around the tube
pub const MIN_SIDE_COUNT: u32 = 2;

/// Maximum number of sectors around the major circle
///
/// Together with [`MAX_SIDE_COUNT`] this keeps flat-shaded vertex counts
/// (`4 × sides × sectors`) addressable by u32 indices.
pub const MAX_SECTOR_COUNT: u32 = 4096;

/// Maximum number of sides around the tube
pub const MAX_SIDE_COUNT: u32 = 4096;

/// Axis the torus faces (the axis through the hole)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    X,
    Y,
    /// Native axis of the generators
    #[default]
    Z,
}

impl UpAxis {
    /// Map the numeric axis convention (X=1, Y=2, Z=3)
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            _ => None,
        }
    }

    /// Numeric axis convention (X=1, Y=2, Z=3)
    pub fn index(self) -> i32 {
        match self {
            Self::X => 1,
            Self::Y => 2,
            Self::Z => 3,
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an [`UpAxis`] from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid up axis '{0}' (expected x, y, z or 1, 2, 3)")]
pub struct ParseUpAxisError(String);

impl FromStr for UpAxis {
    type Err = ParseUpAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "1" => Ok(Self::X),
            "y" | "2" => Ok(Self::Y),
            "z" | "3" => Ok(Self::Z),
            _ => Err(ParseUpAxisError(s.to_string())),
        }
    }
}

/// Torus generation parameters
///
/// Missing fields deserialize to their defaults, so a config file may list
/// only the values it wants to change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParameters {
    /// Distance from the origin to the centre of the tube
    pub major_radius: f32,
    /// Radius of the tube
    pub minor_radius: f32,
    /// Number of sectors around the major circle
    pub sector_count: u32,
    /// Number of sides around the tube
    pub side_count: u32,
    /// Smooth (shared vertices) or flat (per-face vertices) shading
    pub smooth: bool,
    /// Facing direction
    pub up_axis: UpAxis,
}

impl Default for MeshParameters {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.5,
            sector_count: 36,
            side_count: 18,
            smooth: true,
            up_axis: UpAxis::Z,
        }
    }
}

impl MeshParameters {
    /// Validate against the previously accepted parameters
    ///
    /// Non-positive or non-finite radii keep the previous value; counts are
    /// clamped to their minimum and maximum. Nothing is rejected.
    pub fn clamp_against(self, previous: &MeshParameters) -> (MeshParameters, ClampReport) {
        let mut report = ClampReport::default();
        let mut params = self;

        if !is_valid_radius(self.major_radius) {
            warn!(
                "major_radius must be > 0.0 (got {}), keeping {}",
                self.major_radius, previous.major_radius
            );
            params.major_radius = previous.major_radius;
            report.push(Adjustment::MajorRadiusKept {
                requested: self.major_radius,
                kept: previous.major_radius,
            });
        }

        if !is_valid_radius(self.minor_radius) {
            warn!(
                "minor_radius must be > 0.0 (got {}), keeping {}",
                self.minor_radius, previous.minor_radius
            );
            params.minor_radius = previous.minor_radius;
            report.push(Adjustment::MinorRadiusKept {
                requested: self.minor_radius,
                kept: previous.minor_radius,
            });
        }

        params.sector_count = clamp_count(
            "sector_count",
            self.sector_count,
            MIN_SECTOR_COUNT,
            MAX_SECTOR_COUNT,
            &mut report,
            |requested, used| Adjustment::SectorCountRaised { requested, used },
            |requested, used| Adjustment::SectorCountLowered { requested, used },
        );

        params.side_count = clamp_count(
            "side_count",
            self.side_count,
            MIN_SIDE_COUNT,
            MAX_SIDE_COUNT,
            &mut report,
            |requested, used| Adjustment::SideCountRaised { requested, used },
            |requested, used| Adjustment::SideCountLowered { requested, used },
        );

        (params, report)
    }
}

fn is_valid_radius(radius: f32) -> bool {
    radius.is_finite() && radius > 0.0
}

fn clamp_count(
    name: &str,
    requested: u32,
    min: u32,
    max: u32,
    report: &mut ClampReport,
    raised: impl Fn(u32, u32) -> Adjustment,
    lowered: impl Fn(u32, u32) -> Adjustment,
) -> u32 {
    if requested < min {
        warn!("{} must be >= {} (got {}), clamping", name, min, requested);
        report.push(raised(requested, min));
        min
    } else if requested > max {
        warn!("{} must be <= {} (got {}), clamping", name, max, requested);
        report.push(lowered(requested, max));
        max
    } else {
        requested
    }
}

/// A single correction applied while validating [`MeshParameters`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjustment {
    /// Major radius was not positive; the previous value was kept
    MajorRadiusKept { requested: f32, kept: f32 },
    /// Minor radius was not positive; the previous value was kept
    MinorRadiusKept { requested: f32, kept: f32 },
    /// Sector count was raised to the minimum
    SectorCountRaised { requested: u32, used: u32 },
    /// Side count was raised to the minimum
    SideCountRaised { requested: u32, used: u32 },
    /// Sector count was lowered to the maximum
    SectorCountLowered { requested: u32, used: u32 },
    /// Side count was lowered to the maximum
    SideCountLowered { requested: u32, used: u32 },
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MajorRadiusKept { requested, kept } => {
                write!(f, "major radius {requested} ignored, kept {kept}")
            }
            Self::MinorRadiusKept { requested, kept } => {
                write!(f, "minor radius {requested} ignored, kept {kept}")
            }
            Self::SectorCountRaised { requested, used } => {
                write!(f, "sector count {requested} raised to {used}")
            }
            Self::SideCountRaised { requested, used } => {
                write!(f, "side count {requested} raised to {used}")
            }
            Self::SectorCountLowered { requested, used } => {
                write!(f, "sector count {requested} lowered to {used}")
            }
            Self::SideCountLowered { requested, used } => {
                write!(f, "side count {requested} lowered to {used}")
            }
        }
    }
}

/// Corrections made while configuring a mesh
///
/// Empty when every parameter was accepted as given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClampReport {
    adjustments: Vec<Adjustment>,
}

impl ClampReport {
    /// True when no parameter had to be corrected
    pub fn is_clean(&self) -> bool {
        self.adjustments.is_empty()
    }

    /// Corrections in field order
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub(crate) fn push(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
    }
}

/// Generated mesh data (f32 arrays plus the interleaved view)
///
/// Positions, normals and texture coordinates are index-aligned. The
/// interleaved buffer is derived from them and is refreshed by every
/// operation that touches positions or normals.
///
/// Vertices can only be added by the generators in this crate:
///
/// ```compile_fail
/// use glam::Vec3;
/// use toroid_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vec3::ZERO, Vec3::Z, (0.0, 0.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
    interleaved: Vec<InterleavedVertex>,
}

impl Mesh {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh data with room for the given element counts
    pub fn with_capacity(vertices: usize, indices: usize, line_indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            line_indices: Vec::with_capacity(line_indices),
            interleaved: Vec::with_capacity(vertices),
        }
    }

    /// Add a vertex with position, normal and texture coordinate, returning its index
    ///
    /// The interleaved view is not touched; call [`Mesh::rebuild_interleaved`]
    /// once all vertices are in.
    pub(crate) fn add_vertex(&mut self, position: Vec3, normal: Vec3, tex_coord: (f32, f32)) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.tex_coords.push([tex_coord.0, tex_coord.1]);
        index
    }

    /// Add a triangle using three vertex indices
    pub(crate) fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Add a wireframe segment between two vertex indices
    pub(crate) fn add_line(&mut self, i0: u32, i1: u32) {
        self.line_indices.extend_from_slice(&[i0, i1]);
    }

    /// Regenerate the interleaved view from positions, normals and texture coordinates
    ///
    /// This is the only place the interleaved records are written.
    pub fn rebuild_interleaved(&mut self) {
        self.interleaved.clear();
        self.interleaved.extend(
            self.positions
                .iter()
                .zip(&self.normals)
                .zip(&self.tex_coords)
                .map(|((&position, &normal), &tex_coord)| {
                    InterleavedVertex::new(position, normal, tex_coord)
                }),
        );
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.positions
    }

    pub(crate) fn normals_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.normals
    }

    pub(crate) fn indices_mut(&mut self) -> &mut [u32] {
        &mut self.indices
    }

    /// Vertex positions as [x, y, z]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals as [x, y, z], index-aligned with positions
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates as [s, t], index-aligned with positions
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle indices, 3 per triangle, CCW from outside the tube
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Wireframe indices, 2 per segment
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Interleaved records, one per vertex
    pub fn interleaved(&self) -> &[InterleavedVertex] {
        &self.interleaved
    }

    /// Positions as a flat float array (3 per vertex)
    pub fn position_floats(&self) -> &[f32] {
        cast_slice(&self.positions)
    }

    /// Normals as a flat float array (3 per vertex)
    pub fn normal_floats(&self) -> &[f32] {
        cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat float array (2 per vertex)
    pub fn tex_coord_floats(&self) -> &[f32] {
        cast_slice(&self.tex_coords)
    }

    /// Interleaved buffer as a flat float array (8 per vertex)
    pub fn interleaved_floats(&self) -> &[f32] {
        cast_slice(&self.interleaved)
    }

    /// Interleaved buffer as raw bytes for upload
    pub fn interleaved_bytes(&self) -> &[u8] {
        cast_slice(&self.interleaved)
    }

    /// Triangle indices as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Wireframe indices as raw bytes for upload
    pub fn line_index_bytes(&self) -> &[u8] {
        cast_slice(&self.line_indices)
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get normal count
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Get texture coordinate count
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Get triangle index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get wireframe index count
    pub fn line_index_count(&self) -> usize {
        self.line_indices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Size of the position array in bytes
    pub fn vertex_size(&self) -> usize {
        std::mem::size_of_val(self.positions.as_slice())
    }

    /// Size of the normal array in bytes
    pub fn normal_size(&self) -> usize {
        std::mem::size_of_val(self.normals.as_slice())
    }

    /// Size of the texture coordinate array in bytes
    pub fn tex_coord_size(&self) -> usize {
        std::mem::size_of_val(self.tex_coords.as_slice())
    }

    /// Size of the triangle index array in bytes
    pub fn index_size(&self) -> usize {
        std::mem::size_of_val(self.indices.as_slice())
    }

    /// Size of the wireframe index array in bytes
    pub fn line_index_size(&self) -> usize {
        std::mem::size_of_val(self.line_indices.as_slice())
    }

    /// Number of interleaved records
    pub fn interleaved_vertex_count(&self) -> usize {
        self.interleaved.len()
    }

    /// Size of the interleaved buffer in bytes
    pub fn interleaved_size(&self) -> usize {
        std::mem::size_of_val(self.interleaved.as_slice())
    }

    /// Byte stride of the interleaved buffer (always 32)
    pub fn interleaved_stride(&self) -> usize {
        INTERLEAVED_STRIDE
    }

    /// True when the mesh holds no vertices
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
